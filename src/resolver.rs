use chrono::{Local, NaiveDate};
use tracing::warn;

use crate::{
    catalog::TemplateCatalog,
    models::{
        context::TemplateContext,
        template::{MessageTemplate, RenderedMessage, TemplateCategory},
    },
};

/// Resolves the ordered candidate messages for a category. Lazy and
/// restartable: the same (category, context) on the same calendar day always
/// yields the same sequence.
pub fn resolve_templates<'a>(
    catalog: &'a TemplateCatalog,
    category: TemplateCategory,
    context: &'a TemplateContext,
) -> impl Iterator<Item = RenderedMessage> + 'a {
    resolve_templates_on(catalog, category, context, Local::now().date_naive())
}

/// As [`resolve_templates`], with the clock pinned. The "Tomorrow" collapse
/// is relative to `today`.
pub fn resolve_templates_on<'a>(
    catalog: &'a TemplateCatalog,
    category: TemplateCategory,
    context: &'a TemplateContext,
    today: NaiveDate,
) -> impl Iterator<Item = RenderedMessage> + 'a {
    catalog
        .templates_for(category)
        .iter()
        .map(move |template| RenderedMessage {
            template_id: template.id.clone(),
            text: render(template, context, today),
        })
}

pub fn render(template: &MessageTemplate, context: &TemplateContext, today: NaiveDate) -> String {
    let body = if context.is_direct_debit_active {
        template
            .body_direct_debit
            .as_deref()
            .unwrap_or(&template.body)
    } else {
        &template.body
    };

    let expanded = expand_fragments(body, context, today);
    let substituted = substitute(&expanded, context, today);
    tidy(&substituted)
}

pub fn format_price(price: f64) -> String {
    format!("£{:.2}", price)
}

/// Human short form, with the day immediately after `today` collapsing to
/// the literal word "Tomorrow".
pub fn format_scheduled_date(date: NaiveDate, today: NaiveDate) -> String {
    if today.succ_opt() == Some(date) {
        "Tomorrow".to_string()
    } else {
        date.format("%a %-d %b").to_string()
    }
}

/// Resolves one placeholder. `None` means the field is at its sentinel (or
/// the key is unknown), which drops enclosing optional fragments.
fn lookup(context: &TemplateContext, key: &str, today: NaiveDate) -> Option<String> {
    match key {
        "customer_name" => non_empty(&context.customer_name),
        "customer_first_name" => non_empty(&context.customer_first_name),
        "customer_address" => non_empty(&context.customer_address),
        "business_name" => non_empty(&context.business_name),
        "service_type" => non_empty(&context.service_type),
        "review_link" => non_empty(&context.review_link),
        "price" => context.has_price().then(|| format_price(context.price)),
        "scheduled_date" => context
            .scheduled_date
            .map(|date| format_scheduled_date(date, today)),
        other => {
            warn!(placeholder = other, "Template references unknown placeholder");
            None
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Keeps a `[[ ... ]]` fragment only if at least one placeholder inside it
/// carries a non-sentinel value. Fragments without placeholders always
/// render. Brackets are stripped either way.
fn expand_fragments(body: &str, context: &TemplateContext, today: NaiveDate) -> String {
    let mut out = String::with_capacity(body.len());
    let mut rest = body;

    while let Some(start) = rest.find("[[") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        match after.find("]]") {
            Some(end) => {
                let fragment = &after[..end];
                if fragment_has_value(fragment, context, today) {
                    out.push_str(fragment);
                }
                rest = &after[end + 2..];
            }
            None => {
                // unbalanced marker, emit verbatim
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}

fn fragment_has_value(fragment: &str, context: &TemplateContext, today: NaiveDate) -> bool {
    let mut saw_placeholder = false;

    for key in placeholder_keys(fragment) {
        saw_placeholder = true;
        if lookup(context, key, today).is_some() {
            return true;
        }
    }

    !saw_placeholder
}

fn placeholder_keys(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;

    std::iter::from_fn(move || {
        let start = rest.find("{{")?;
        let after = &rest[start + 2..];
        let end = after.find("}}")?;
        let key = after[..end].trim();
        rest = &after[end + 2..];
        Some(key)
    })
}

fn substitute(text: &str, context: &TemplateContext, today: NaiveDate) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find("{{") {
        let after = &rest[start + 2..];

        match after.find("}}") {
            Some(end) => {
                out.push_str(&rest[..start]);
                let key = after[..end].trim();
                out.push_str(&lookup(context, key, today).unwrap_or_default());
                rest = &after[end + 2..];
            }
            None => break,
        }
    }

    out.push_str(rest);
    out
}

/// Collapses the residue of dropped fragments: doubled spaces and a space
/// left hanging before closing punctuation.
fn tidy(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for ch in text.chars() {
        if ch == ' ' && out.ends_with(' ') {
            continue;
        }
        if matches!(ch, '.' | ',' | '!' | '?') && out.ends_with(' ') {
            out.pop();
        }
        out.push(ch);
    }

    out.trim().to_string()
}
