use tracing::debug;

use crate::{
    catalog::TemplateCatalog,
    coordinator::{PickerCoordinator, PresentPicker},
    models::template::RenderedMessage,
    resolver::resolve_templates,
};

/// Drives one presentation round for the currently open session: resolve the
/// candidate messages, let the surface pick, and route the outcome back
/// through the coordinator. Does nothing while idle.
pub fn present_open_session(
    coordinator: &mut PickerCoordinator,
    catalog: &TemplateCatalog,
    surface: &dyn PresentPicker,
) {
    let Some((category, options)) = coordinator.view().map(|view| {
        let options: Vec<RenderedMessage> =
            resolve_templates(catalog, view.category, view.context).collect();
        (view.category, options)
    }) else {
        return;
    };

    debug!(category = %category, candidates = options.len(), "Presenting picker");

    match surface.choose(&options) {
        Some(message) => coordinator.select(&message),
        None => coordinator.cancel(),
    }
}
