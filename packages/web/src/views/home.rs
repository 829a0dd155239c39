//! Landing page.

use dioxus::prelude::*;

struct Feature {
    icon: &'static str,
    alt: &'static str,
    title: &'static str,
    text: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        icon: "fa fa-comments",
        alt: "Chat Icon",
        title: "You are our #1 priority",
        text: "Need to talk to a representative? You can get in touch through our \
               24/7 chat or through a phone call in less than 5 minutes.",
    },
    Feature {
        icon: "fa fa-money",
        alt: "Money Icon",
        title: "More savings means higher rates",
        text: "The more you save with us, the higher your interest rate will be!",
    },
    Feature {
        icon: "fa fa-shield",
        alt: "Security Icon",
        title: "Security you can trust",
        text: "We use top of the line encryption to make sure your data and money \
               is always safe.",
    },
];

#[component]
pub fn Home() -> Element {
    rsx! {
        main {
            div {
                class: "hero",
                section {
                    class: "hero-content",
                    h2 { class: "sr-only", "Promoted Content" }
                    p { class: "subtitle", "No fees." }
                    p { class: "subtitle", "No minimum deposit." }
                    p { class: "subtitle", "High interest rates." }
                    p { class: "text", "Open a savings account with Argent Bank today!" }
                }
            }
            section {
                class: "features",
                h2 { class: "sr-only", "Features" }
                for feature in FEATURES.iter() {
                    div {
                        key: "{feature.title}",
                        class: "feature-item",
                        i { class: "feature-icon {feature.icon}", title: "{feature.alt}" }
                        h3 { class: "feature-item-title", "{feature.title}" }
                        p { "{feature.text}" }
                    }
                }
            }
        }
    }
}
