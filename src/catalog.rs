use crate::models::template::{MessageTemplate, TemplateCategory};

/// Ordered template registry. Registration order is preserved per category
/// and the first-registered phrasing is the default shown to the operator.
/// Lookups for a category with no registered templates fall back to the
/// general pool.
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    entries: Vec<(TemplateCategory, Vec<MessageTemplate>)>,
}

impl TemplateCatalog {
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// The built-in phrasings shipped with the app.
    pub fn builtin() -> Self {
        let mut catalog = Self::empty();

        catalog.register(
            TemplateCategory::General,
            vec![
                MessageTemplate::new(
                    "general_checkin",
                    "Hi {{customer_name}}, it's {{business_name}}.\
                     [[ Your next clean is booked for {{scheduled_date}}.]]\
                     [[ The total will be {{price}}.]] \
                     Let me know if you have any questions.",
                ),
                MessageTemplate::new(
                    "general_note",
                    "Hi {{customer_first_name}}, {{business_name}} here.\
                     [[ Just a quick message about your {{service_type}}.]] \
                     Reply to this text if you need anything.",
                ),
            ],
        );

        catalog.register(
            TemplateCategory::Review,
            vec![
                MessageTemplate::new(
                    "review_thanks",
                    "Hi {{customer_first_name}}, thanks for choosing {{business_name}}. \
                     If you were happy with the clean, a short review would mean a lot.\
                     [[ {{review_link}}]]",
                ),
                MessageTemplate::new(
                    "review_followup",
                    "Hi {{customer_first_name}}, glad we could help today. \
                     Would you mind leaving {{business_name}} a quick review?\
                     [[ {{review_link}}]]",
                ),
            ],
        );

        catalog.register(
            TemplateCategory::OnMyWay,
            vec![
                MessageTemplate::new(
                    "on_my_way_now",
                    "Hi {{customer_first_name}}, it's {{business_name}}. \
                     I'm on my way[[ to {{customer_address}}]] now, see you shortly.",
                ),
                MessageTemplate::new(
                    "on_my_way_soon",
                    "Hi {{customer_first_name}}, just to let you know I'll be with you\
                     [[ at {{customer_address}}]] soon.",
                ),
            ],
        );

        catalog.register(
            TemplateCategory::PaymentReminder,
            vec![
                MessageTemplate::new(
                    "payment_due",
                    "Hi {{customer_first_name}}, a quick reminder from {{business_name}}\
                     [[ that {{price}} is due for your recent clean]]. \
                     You can pay by cash or bank transfer, thanks!",
                )
                .with_direct_debit_body(
                    "Hi {{customer_first_name}}, your clean[[ at {{customer_address}}]] \
                     is all done. The balance[[ of {{price}}]] will be collected by \
                     Direct Debit shortly, nothing to do on your end.",
                ),
                MessageTemplate::new(
                    "payment_nudge",
                    "Hi {{customer_first_name}}, hope you're well.\
                     [[ There is {{price}} outstanding for your window clean.]] \
                     Let me know if you'd like the bank details again.",
                )
                .with_direct_debit_body(
                    "Hi {{customer_first_name}}, hope you're well. \
                     Your balance[[ of {{price}}]] will be collected by Direct Debit, \
                     nothing needed from you.",
                ),
            ],
        );

        catalog.register(
            TemplateCategory::TomorrowReminder,
            vec![
                MessageTemplate::new(
                    "tomorrow_booked",
                    "Hi {{customer_first_name}}, it's {{business_name}}.\
                     [[ Your window clean is booked for {{scheduled_date}}.]]\
                     [[ The total will be {{price}}.]] \
                     See you then!",
                ),
                MessageTemplate::new(
                    "tomorrow_access",
                    "Hi {{customer_first_name}}, just a reminder that {{business_name}} \
                     will be round[[ {{scheduled_date}}]] for your window clean. \
                     Please leave any side gates unlocked.",
                ),
            ],
        );

        catalog
    }

    /// Registers (or replaces) the template list for a category.
    pub fn register(&mut self, category: TemplateCategory, templates: Vec<MessageTemplate>) {
        match self.entries.iter_mut().find(|(c, _)| *c == category) {
            Some((_, existing)) => *existing = templates,
            None => self.entries.push((category, templates)),
        }
    }

    /// Ordered templates for a category, falling back to the general pool
    /// when the category has nothing registered.
    pub fn templates_for(&self, category: TemplateCategory) -> &[MessageTemplate] {
        self.lookup(category)
            .or_else(|| self.lookup(TemplateCategory::General))
            .unwrap_or(&[])
    }

    fn lookup(&self, category: TemplateCategory) -> Option<&[MessageTemplate]> {
        self.entries
            .iter()
            .find(|(c, templates)| *c == category && !templates.is_empty())
            .map(|(_, templates)| templates.as_slice())
    }
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
