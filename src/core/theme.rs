//! Live theme propagation.
//!
//! The page shell reads a single style token for the brand color. The store
//! writes that token whenever the theme color changes, before any subscriber
//! sees the new content.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Name of the style token carrying the theme color
pub const THEME_TOKEN: &str = "--sumu-wood";

/// Destination for style tokens (a stylesheet, a DOM root, a test double)
pub trait ThemeSink {
    /// Set a token; last write wins
    fn set_token(&mut self, name: &str, value: &str);
}

/// In-memory token table.
///
/// Clones share the same table, so the shell can hold one clone while the
/// store writes through another.
#[derive(Debug, Clone, Default)]
pub struct StyleTokens {
    tokens: Rc<RefCell<HashMap<String, String>>>,
}

impl StyleTokens {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a token
    pub fn get(&self, name: &str) -> Option<String> {
        self.tokens.borrow().get(name).cloned()
    }

    /// Current value of the theme token
    pub fn theme_color(&self) -> Option<String> {
        self.get(THEME_TOKEN)
    }

    /// Render as a `:root { ... }` CSS block, tokens sorted by name
    pub fn to_css(&self) -> String {
        let tokens = self.tokens.borrow();
        let mut names: Vec<_> = tokens.keys().collect();
        names.sort();

        let mut css = String::from(":root {\n");
        for name in names {
            css.push_str(&format!("  {}: {};\n", name, tokens[name]));
        }
        css.push('}');
        css
    }
}

impl ThemeSink for StyleTokens {
    fn set_token(&mut self, name: &str, value: &str) {
        self.tokens
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_tokens() {
        let shell = StyleTokens::new();
        let mut writer = shell.clone();

        writer.set_token(THEME_TOKEN, "#000000");
        assert_eq!(shell.theme_color(), Some("#000000".to_string()));

        writer.set_token(THEME_TOKEN, "#FFFFFF");
        assert_eq!(shell.theme_color(), Some("#FFFFFF".to_string()));
    }

    #[test]
    fn test_css_rendering() {
        let mut tokens = StyleTokens::new();
        tokens.set_token(THEME_TOKEN, "#E3B341");
        assert_eq!(tokens.to_css(), ":root {\n  --sumu-wood: #E3B341;\n}");
    }
}
