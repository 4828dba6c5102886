/// The "message sent" confirmation dialog.
#[derive(Debug, Clone)]
pub struct Modal {
    pub title: String,
    pub message: String,
    visible: bool,
}

impl Modal {
    pub fn success() -> Self {
        Self {
            title: "Message Sent!".to_string(),
            message: "Thank you for reaching out. I'll get back to you soon.".to_string(),
            visible: false,
        }
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
