//! Partner farmer profiles.

use leptos::prelude::*;

#[derive(Clone, Copy)]
struct Farmer {
    name: &'static str,
    farm: &'static str,
    region: &'static str,
    specialty: &'static str,
    since: u16,
    bio: &'static str,
}

const FARMERS: &[Farmer] = &[
    Farmer {
        name: "Elena Ruiz",
        farm: "Fernhill Farm",
        region: "Willamette Valley",
        specialty: "Heirloom tomatoes & peppers",
        since: 1998,
        bio: "Elena dry-farms forty tomato varieties on land her family has worked for three generations.",
    },
    Farmer {
        name: "Marcus Bell",
        farm: "Two Creeks Pasture",
        region: "Yamhill County",
        specialty: "Pasture-raised eggs",
        since: 2011,
        bio: "Marcus rotates his hens across thirty acres of clover so the flock and the soil both stay healthy.",
    },
    Farmer {
        name: "Hana Sato",
        farm: "Little Root Gardens",
        region: "Hood River",
        specialty: "Greens & root vegetables",
        since: 2016,
        bio: "Hana grows year-round under low tunnels and picks greens the morning your box ships.",
    },
];

#[component]
pub fn FarmerProfiles() -> impl IntoView {
    view! {
        <section id="farmers" class="farmers">
            <h2 class="section-title">"Meet your farmers"</h2>
            <div class="farmers__grid">
                {FARMERS
                    .iter()
                    .map(|f| {
                        view! {
                            <article class="farmer-card">
                                <div class="farmer-card__avatar" aria-hidden="true">{initials(f.name)}</div>
                                <h3>{f.name}</h3>
                                <p class="farmer-card__tagline">{farm_tagline(f.farm, f.region)}</p>
                                <p class="farmer-card__specialty">{f.specialty}</p>
                                <p>{f.bio}</p>
                                <p class="farmer-card__since">{format!("Growing since {}", f.since)}</p>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

fn farm_tagline(farm: &str, region: &str) -> String {
    format!("{farm} · {region}")
}

/// Up to two uppercase initials from a display name.
fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}
