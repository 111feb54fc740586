use contact_form_config::Config;
use contact_form_core_contracts::renderer::ContactFormRenderer;
use contact_form_core_impl::{
    validator::{ContactFormValidatorConfig, ContactFormValidatorImpl},
    ContactFormServiceConfig, ContactFormServiceImpl,
};

pub type ContactForm<Renderer> = ContactFormServiceImpl<ContactFormValidatorImpl, Renderer>;

/// Mounts a contact form configured by `config` that publishes to `renderer`.
pub fn mount<Renderer: ContactFormRenderer>(
    config: &Config,
    renderer: Renderer,
) -> ContactForm<Renderer> {
    let validator = ContactFormValidatorImpl::new(ContactFormValidatorConfig {
        first_name_min_length: config.form.first_name_min_length,
    });

    ContactFormServiceImpl::new(
        validator,
        renderer,
        ContactFormServiceConfig {
            live_validation: config.form.live_validation,
            clear_message_on_submit: config.form.clear_message_on_submit,
        },
    )
}
