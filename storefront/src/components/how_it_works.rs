//! "How it works" explainer on the home page.

use leptos::prelude::*;

/// DOM id the hero and footer scroll to.
pub const SECTION_ID: &str = "how-it-works";

#[derive(Clone, Copy)]
struct Step {
    title: &'static str,
    body: &'static str,
}

const STEPS: &[Step] = &[
    Step {
        title: "Pick your box",
        body: "Choose a seasonal produce box sized for one, two, or the whole family.",
    },
    Step {
        title: "Farmers harvest to order",
        body: "Partner farms pick what you ordered the day before it ships. Nothing sits in a warehouse.",
    },
    Step {
        title: "We deliver to your door",
        body: "Boxes arrive chilled on your delivery day, in packaging you can hand back next week.",
    },
    Step {
        title: "Skip or swap anytime",
        body: "Pause a week, swap items, or change your plan up to two days before delivery.",
    },
];

#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <section id=SECTION_ID class="how-it-works">
            <h2 class="section-title">"How it works"</h2>
            <ol class="how-it-works__steps">
                {STEPS
                    .iter()
                    .enumerate()
                    .map(|(i, step)| {
                        view! {
                            <li class="how-it-works__step">
                                <span class="how-it-works__number">{step_number(i)}</span>
                                <h3>{step.title}</h3>
                                <p>{step.body}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </section>
    }
}

fn step_number(index: usize) -> String {
    format!("{:02}", index + 1)
}
