//! Site footer with section links and the demo entry point.

use leptos::prelude::*;

use crate::components::how_it_works::SECTION_ID as HOW_IT_WORKS_ID;
use crate::util::scroll::{scroll_to_section, section_href};

#[derive(Clone, Copy)]
struct FooterLink {
    label: &'static str,
    href: &'static str,
}

const COMPANY_LINKS: &[FooterLink] = &[
    FooterLink { label: "Our farmers", href: "/#farmers" },
    FooterLink { label: "Reviews", href: "/#testimonials" },
    FooterLink { label: "Careers", href: "mailto:jobs@farmbox.test" },
];

const SUPPORT_LINKS: &[FooterLink] = &[
    FooterLink { label: "Help center", href: "mailto:help@farmbox.test" },
    FooterLink { label: "Delivery areas", href: "/#how-it-works" },
    FooterLink { label: "Staff demo", href: "/demo" },
];

#[component]
pub fn Footer() -> impl IntoView {
    let on_how_it_works = move |ev: leptos::ev::MouseEvent| {
        if scroll_to_section(HOW_IT_WORKS_ID) {
            ev.prevent_default();
        }
    };

    view! {
        <footer class="site-footer">
            <div class="site-footer__brand">
                <span class="site-footer__logo">"Farmbox"</span>
                <p>"Harvested to order by local farms, delivered to your door."</p>
                <a class="site-footer__cta" href=section_href(HOW_IT_WORKS_ID) on:click=on_how_it_works>
                    "How it works"
                </a>
            </div>
            <FooterColumn title="Company" links=COMPANY_LINKS/>
            <FooterColumn title="Support" links=SUPPORT_LINKS/>
            <p class="site-footer__legal">{legal_line()}</p>
        </footer>
    }
}

#[component]
fn FooterColumn(title: &'static str, links: &'static [FooterLink]) -> impl IntoView {
    view! {
        <nav class="site-footer__column" aria-label=title>
            <h4>{title}</h4>
            <ul>
                {links
                    .iter()
                    .map(|link| view! { <li><a href=link.href>{link.label}</a></li> })
                    .collect_view()}
            </ul>
        </nav>
    }
}

fn legal_line() -> &'static str {
    "© Farmbox Cooperative. Grown close to home."
}
