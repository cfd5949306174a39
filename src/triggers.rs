use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use crate::{
    coordinator::PickerCoordinator,
    dispatch::Dispatcher,
    models::{
        context::{ContextInput, TemplateContext},
        records::{BusinessProfile, CustomerRecord, JobRecord},
        template::TriggerType,
        validation::validate_phone_number,
    },
};

/// Whether a trigger site may show its send button at all. Customers without
/// a usable phone number get no affordance, not an error.
pub fn has_send_affordance(customer: &CustomerRecord) -> bool {
    usable_phone(customer).is_some()
}

fn usable_phone(customer: &CustomerRecord) -> Option<&str> {
    customer
        .phone
        .as_deref()
        .filter(|phone| validate_phone_number(phone).is_ok())
}

/// Gathers the partial context for `trigger` from the supplied records and
/// opens the picker. Returns `false`, building nothing, when the phone-number
/// guard fails.
pub fn open_message_picker(
    coordinator: &mut PickerCoordinator,
    dispatcher: &Rc<RefCell<Dispatcher>>,
    trigger: TriggerType,
    customer: &CustomerRecord,
    job: Option<&JobRecord>,
    profile: &BusinessProfile,
) -> bool {
    let Some(phone) = usable_phone(customer) else {
        debug!(trigger = %trigger, "No usable phone number, send affordance suppressed");
        return false;
    };

    let input = ContextInput {
        customer_name: Some(customer.name.clone()),
        customer_first_name: customer.first_name.clone(),
        customer_address: customer.address.clone(),
        price: job.map(|job| job.price),
        scheduled_date: job.and_then(|job| job.scheduled_date),
        business_name: profile.name.clone(),
        service_type: job.and_then(|job| job.service_type.clone()),
        is_direct_debit_active: Some(customer.direct_debit_active),
        review_link: profile.review_link.clone(),
    };

    let context = TemplateContext::prepare(input);

    let phone = phone.to_string();
    let job_id = job.map(|job| job.id.clone());
    let dispatcher = Rc::clone(dispatcher);

    coordinator.open(
        trigger,
        context,
        Box::new(move |message: &str| {
            dispatcher
                .borrow_mut()
                .send(&phone, message, trigger, job_id.as_deref());
        }),
    );

    true
}
