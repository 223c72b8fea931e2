use leptos::prelude::*;

use crate::core::content::{FeatureGroup, site};
use crate::ui::icon::Icon;

/// WhatsApp features followed by team productivity features
#[component]
pub fn FeaturesSection() -> impl IntoView {
    let content = site();

    view! {
        <section id="recursos" class="py-20 bg-white scroll-mt-16">
            <div class="container mx-auto px-6">
                <FeatureGrid group={&content.features} tone=Tone::Accent class="mb-20"/>
                <FeatureGrid group={&content.productivity} tone=Tone::Primary/>
            </div>
        </section>
    }
}

/// Brand color of a feature group
#[derive(Clone, Copy)]
enum Tone {
    Accent,
    Primary,
}

impl Tone {
    fn divider(self) -> &'static str {
        match self {
            Tone::Accent => "w-24 h-1 bg-accent mx-auto",
            Tone::Primary => "w-24 h-1 bg-primary mx-auto",
        }
    }

    fn tile(self) -> &'static str {
        match self {
            Tone::Accent => "bg-accent/10 group-hover:bg-accent/20",
            Tone::Primary => "bg-primary/10 group-hover:bg-primary/20",
        }
    }
}

#[component]
fn FeatureGrid(
    group: &'static FeatureGroup,
    tone: Tone,
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("max-w-6xl mx-auto {}", class)>
            <div class="text-center mb-16">
                <h2 class="text-3xl lg:text-4xl font-bold text-gray-900 mb-4">{group.title}</h2>
                <div class=tone.divider()></div>
            </div>

            <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8">
                {group.items.iter().map(|feature| view! {
                    <div class="card group p-6 text-center hover:-translate-y-2">
                        <div class=format!(
                            "w-16 h-16 {} rounded-2xl flex items-center justify-center mx-auto mb-4 transition-colors",
                            tone.tile()
                        )>
                            <Icon kind=feature.icon class="w-8 h-8"/>
                        </div>
                        <h3 class="text-lg font-semibold text-gray-900 mb-3">{feature.title}</h3>
                        <p class="text-gray-600 leading-relaxed">{feature.description}</p>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}
