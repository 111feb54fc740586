use contact_form_models::state::ContactFormState;

/// Receives the form state after every change.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFormRenderer: 'static {
    fn render(&mut self, state: &ContactFormState);
}

#[cfg(feature = "mock")]
impl MockContactFormRenderer {
    pub fn with_render(mut self, state: ContactFormState) -> Self {
        self.expect_render()
            .once()
            .with(mockall::predicate::eq(state))
            .return_const(());
        self
    }

    /// Accepts any number of renders.
    pub fn with_any_render(mut self) -> Self {
        self.expect_render().return_const(());
        self
    }
}
