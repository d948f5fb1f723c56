//! Member testimonials with star ratings.

#[cfg(test)]
#[path = "testimonials_test.rs"]
mod tests;

use leptos::prelude::*;

use crate::util::format::rating_stars;

#[derive(Clone, Copy)]
struct Testimonial {
    name: &'static str,
    location: &'static str,
    plan: &'static str,
    quote: &'static str,
    rating: u8,
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Maya R.",
        location: "Portland, OR",
        plan: "Family Box",
        quote: "The strawberries taste like the ones from my grandmother's garden. My kids actually ask for vegetables now.",
        rating: 5,
    },
    Testimonial {
        name: "Jordan T.",
        location: "Eugene, OR",
        plan: "Solo Box",
        quote: "Skipping a week takes two clicks, and I always know which farm my greens came from.",
        rating: 5,
    },
    Testimonial {
        name: "Alex & Sam P.",
        location: "Salem, OR",
        plan: "Couple Box",
        quote: "Delivery window is reliable and the packaging pickup is a nice touch. Wish there were more mushroom weeks.",
        rating: 4,
    },
];

#[component]
pub fn Testimonials() -> impl IntoView {
    let summary = rating_summary(TESTIMONIALS);

    view! {
        <section id="testimonials" class="testimonials">
            <h2 class="section-title">"What members say"</h2>
            <p class="testimonials__summary">{summary}</p>
            <div class="testimonials__grid">
                {TESTIMONIALS
                    .iter()
                    .map(|t| {
                        view! {
                            <figure class="testimonial-card">
                                <div class="testimonial-card__stars" aria-label=format!("{} out of 5", t.rating.min(5))>
                                    {rating_stars(t.rating)}
                                </div>
                                <blockquote>{t.quote}</blockquote>
                                <figcaption>
                                    <strong>{t.name}</strong>
                                    <span class="testimonial-card__meta">{format!("{} · {}", t.location, t.plan)}</span>
                                </figcaption>
                            </figure>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

/// `"4.7 average from 3 members"`, or an empty string with no testimonials.
fn rating_summary(testimonials: &[Testimonial]) -> String {
    if testimonials.is_empty() {
        return String::new();
    }
    let total: u32 = testimonials.iter().map(|t| u32::from(t.rating.min(5))).sum();
    #[allow(clippy::cast_precision_loss)]
    let average = f64::from(total) / testimonials.len() as f64;
    let noun = if testimonials.len() == 1 { "member" } else { "members" };
    format!("{average:.1} average from {} {noun}", testimonials.len())
}
