/// Toolkit-neutral key identity for the page's keyboard handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKey {
    Control,
    Tab,
    /// A letter key, always lowercase.
    Letter(char),
    Other,
}

impl PageKey {
    pub fn letter(c: char) -> Self {
        if c.is_ascii_alphabetic() {
            PageKey::Letter(c.to_ascii_lowercase())
        } else {
            PageKey::Other
        }
    }
}
