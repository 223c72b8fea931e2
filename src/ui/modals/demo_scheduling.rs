//! Demo scheduling modal
//!
//! Three steps: contact details, slot selection, confirmation. Slots are
//! generated in the visitor's local time when the second step renders.

use chrono::Local;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::content::IconKind;
use crate::core::flow::{DemoFlow, DemoStep, LeadField, schedule_demo};
use crate::core::schedule::{format_demo_date, generate_time_slots};
use crate::ui::common::{
    BaseModal, ErrorMessage, FormField, LoadingButton, NextSteps, SelectField, SuccessMessage,
};
use crate::ui::context::use_landing_context;

const NEXT_STEPS: &[&str] = &[
    "Você receberá um email de confirmação",
    "Nossa equipe entrará em contato 1 dia antes",
    "O demo será feito via WhatsApp ou Google Meet",
    "Duração: aproximadamente 30 minutos",
];

#[component]
pub fn DemoSchedulingModal() -> impl IntoView {
    let ctx = use_landing_context();
    let flow = RwSignal::new(DemoFlow::default());

    let step = Memo::new(move |_| flow.with(|f| f.step));
    let loading = Memo::new(move |_| flow.with(|f| f.loading));
    let error = Signal::derive(move || flow.with(|f| f.error.clone()));

    let field = move |name: LeadField| {
        Signal::<String>::from(Memo::new(move |_| flow.with(|f| f.fields.get(name).to_string())))
    };
    let edit = move |name: LeadField| Callback::new(move |value: String| flow.update(|f| f.edit(name, value)));

    let close = Callback::new(move |_: ()| {
        if flow.with_untracked(DemoFlow::can_close) {
            flow.update(DemoFlow::reset);
            ctx.demo_open.set(false);
        }
    });

    let back = move |_| {
        flow.update(|f| {
            if let Err(e) = f.back() {
                leptos::logging::warn!("Demo modal: {}", e);
            }
        })
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        match step.get_untracked() {
            DemoStep::Entry => flow.update(|f| {
                f.next();
            }),
            DemoStep::DateTime => {
                let mut pending = None;
                flow.update(|f| pending = f.begin_submit(Local::now().naive_local()));
                let Some((fields, selected)) = pending else {
                    return;
                };

                let client = ctx.client();
                spawn_local(async move {
                    let outcome = schedule_demo(&client, &fields, selected, &Local).await;
                    flow.update(|f| f.finish(outcome));
                });
            }
            DemoStep::Success => {}
        }
    };

    let title = Signal::derive(move || match step.get() {
        DemoStep::Success => "Demo Agendado!".to_string(),
        _ => "Agendar Demo".to_string(),
    });
    let icon = Signal::derive(move || match step.get() {
        DemoStep::Success => IconKind::CheckCircle,
        _ => IconKind::Calendar,
    });

    let contact_step = move || {
        view! {
            <FormField
                id="demo-name"
                label="Nome completo"
                required=true
                placeholder="Seu nome completo"
                value=field(LeadField::Name)
                on_input=edit(LeadField::Name)
            />
            <FormField
                id="demo-email"
                label="Email"
                required=true
                input_type="email"
                placeholder="seu@email.com"
                value=field(LeadField::Email)
                on_input=edit(LeadField::Email)
            />
            <FormField
                id="demo-whatsapp"
                label="WhatsApp"
                required=true
                input_type="tel"
                placeholder="11999999999"
                value=field(LeadField::Whatsapp)
                on_input=edit(LeadField::Whatsapp)
            />
            <FormField
                id="demo-company"
                label="Empresa"
                placeholder="Nome da sua empresa"
                value=field(LeadField::Company)
                on_input=edit(LeadField::Company)
            />

            <div class="flex gap-3 pt-4">
                <button type="button" class="btn-base btn-outline flex-1" on:click=move |_| close.run(())>
                    "Cancelar"
                </button>
                <button type="submit" class="btn-base btn-primary flex-1">"Próximo"</button>
            </div>
        }
    };

    let datetime_step = move || {
        let options = generate_time_slots(Local::now().date_naive())
            .into_iter()
            .map(|slot| (slot.value, slot.label))
            .collect::<Vec<_>>();

        view! {
            <div class="text-sm text-gray-600 mb-4">
                <strong>{move || flow.with(|f| f.fields.name.clone())}</strong>
                ", escolha o melhor horário para seu demo:"
            </div>

            <SelectField
                id="preferred_datetime"
                label="Data e Horário"
                required=true
                placeholder="Selecione uma data e horário"
                hint="Horário local, apenas dias úteis das 9h às 18h"
                value=field(LeadField::PreferredDatetime)
                on_change=edit(LeadField::PreferredDatetime)
                options=options
                disabled=loading
            />

            <div class="flex gap-3 pt-4">
                <button
                    type="button"
                    class="btn-base btn-outline flex-1"
                    on:click=back
                    disabled=move || loading.get()
                >
                    "Voltar"
                </button>
                <LoadingButton
                    loading=loading
                    text="Agendar Demo"
                    loading_text="Agendando..."
                    class="btn-accent"
                />
            </div>
        }
    };

    let success_step = move || {
        view! {
            <div class="space-y-4">
                <SuccessMessage heading="Demo agendado com sucesso!">
                    {move || {
                        flow.with(|f| {
                            f.confirmation
                                .as_ref()
                                .and_then(|c| c.demo_scheduled.clone())
                        })
                        .map(|raw| view! {
                            <div class="mt-2">
                                <strong>"Data: "</strong>
                                {format_demo_date(&raw, &Local)}
                            </div>
                        })
                    }}
                </SuccessMessage>

                <NextSteps title="O que acontece agora:" items=NEXT_STEPS/>

                <button type="button" class="btn-base btn-primary w-full" on:click=move |_| close.run(())>
                    "Perfeito!"
                </button>
            </div>
        }
    };

    view! {
        <BaseModal title=title icon=icon is_open=ctx.demo_open on_close=close>
            {move || match step.get() {
                DemoStep::Success => success_step().into_any(),
                current => view! {
                    <form on:submit=on_submit class="space-y-4" novalidate=true>
                        <ErrorMessage error=error/>
                        {match current {
                            DemoStep::Entry => contact_step().into_any(),
                            _ => datetime_step().into_any(),
                        }}
                    </form>
                }
                .into_any(),
            }}
        </BaseModal>
    }
}
