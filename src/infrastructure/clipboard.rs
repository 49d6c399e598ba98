pub struct ClipboardService;

impl ClipboardService {
    /// Puts text on the system clipboard. Headless environments have no
    /// clipboard; the error text is surfaced as a toast.
    pub fn copy(text: &str) -> Result<(), String> {
        let mut clipboard = arboard::Clipboard::new().map_err(|e| e.to_string())?;
        clipboard.set_text(text.to_string()).map_err(|e| e.to_string())
    }
}
