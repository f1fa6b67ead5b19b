/// Notification sink shared by every game object. Objects report what
/// happened; the mediator keeps the latest message and logs it.
#[derive(Debug, Clone)]
pub struct Mediator {
    message: String,
    current_background: String,
    notifications: usize,
}

impl Mediator {
    pub fn new() -> Self {
        let mediator = Self {
            message: "Mediator was created.".to_string(),
            current_background: String::new(),
            notifications: 1,
        };
        mediator.print_message();
        mediator
    }

    pub fn notify(&mut self, message: impl Into<String>) {
        self.message = message.into();
        self.notifications += 1;
        self.print_message();
    }

    pub fn print_message(&self) {
        tracing::info!(target: "mediator", "{}", self.message);
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Messages received so far, including the creation notice.
    pub fn notifications(&self) -> usize {
        self.notifications
    }

    pub fn current_background(&self) -> &str {
        &self.current_background
    }

    pub fn set_current_background(&mut self, name: impl Into<String>) {
        self.current_background = name.into();
    }
}

impl Default for Mediator {
    fn default() -> Self {
        Self::new()
    }
}
