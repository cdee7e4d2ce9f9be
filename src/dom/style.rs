use web_sys::Document;

use crate::error::{EnhanceError, Result};

pub const EXIT_KEYFRAMES: &str = "
@keyframes slideOutRight {
    to { transform: translateX(100%); opacity: 0; }
}
";

/// Appends the row exit keyframes to `<head>`.
pub fn install_keyframes(document: &Document) -> Result<()> {
    let head = document.head().ok_or(EnhanceError::MissingElement("head"))?;
    let style = document.create_element("style")?;
    style.set_text_content(Some(EXIT_KEYFRAMES));
    head.append_child(&style)?;
    Ok(())
}

/// `animation` value for a row leaving over `exit_ms`.
pub fn exit_animation(exit_ms: u32) -> String {
    format!("slideOutRight {}ms ease forwards", exit_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_animation_uses_delay() {
        assert_eq!(exit_animation(300), "slideOutRight 300ms ease forwards");
    }
}
