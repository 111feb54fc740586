use contact_form_core_contracts::{renderer::MockContactFormRenderer, ContactFormService};
use contact_form_models::values::FieldValues;

use crate::{validator::ContactFormValidatorImpl, ContactFormServiceConfig, ContactFormServiceImpl};


type Sut = ContactFormServiceImpl<ContactFormValidatorImpl, MockContactFormRenderer>;

fn mount(config: ContactFormServiceConfig) -> Sut {
    Sut::new(
        ContactFormValidatorImpl::default(),
        MockContactFormRenderer::new().with_any_render(),
        config,
    )
}

/// Types every non-empty value into the form.
fn fill(sut: &mut impl ContactFormService, values: &FieldValues) {
    for (field, value) in values.iter().filter(|(_, value)| !value.is_empty()) {
        sut.set_field(field, value.into());
    }
}
