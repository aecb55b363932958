//! Single-open FAQ accordion.

use inkpress_commerce::content::Faq;
use inkpress_commerce::ids::FaqId;
use leptos::prelude::*;

/// Next open entry after clicking one: clicking the open entry closes it,
/// clicking any other opens it.
pub fn toggle_open(current: Option<FaqId>, clicked: FaqId) -> Option<FaqId> {
    if current.as_ref() == Some(&clicked) {
        None
    } else {
        Some(clicked)
    }
}

/// Expand/collapse list of FAQs, at most one open at a time.
#[component]
pub fn FaqAccordion(faqs: Vec<Faq>) -> impl IntoView {
    let open = RwSignal::new(None::<FaqId>);

    view! {
        <div class="faq-accordion">
            {faqs
                .into_iter()
                .map(|faq| {
                    let id = faq.id.clone();
                    let toggle_id = faq.id.clone();
                    let is_open = Signal::derive(move || open.get() == Some(id.clone()));
                    view! {
                        <div class="faq-entry" class:open=move || is_open.get()>
                            <button
                                class="faq-question"
                                aria-expanded=move || is_open.get().to_string()
                                on:click=move |_| {
                                    open.update(|o| *o = toggle_open(o.clone(), toggle_id.clone()));
                                }
                            >
                                {faq.question}
                            </button>
                            <Show when=move || is_open.get()>
                                <div class="faq-answer">
                                    <p>{faq.answer.clone()}</p>
                                </div>
                            </Show>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clicking_closed_entry_opens_it() {
        assert_eq!(
            toggle_open(None, FaqId::new("f1")),
            Some(FaqId::new("f1"))
        );
    }

    #[test]
    fn test_clicking_open_entry_closes_it() {
        assert_eq!(toggle_open(Some(FaqId::new("f1")), FaqId::new("f1")), None);
    }

    #[test]
    fn test_clicking_other_entry_switches() {
        assert_eq!(
            toggle_open(Some(FaqId::new("f1")), FaqId::new("f2")),
            Some(FaqId::new("f2"))
        );
    }
}
