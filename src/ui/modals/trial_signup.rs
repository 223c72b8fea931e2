//! Trial signup modal
//!
//! One-step form. Validation, submission and the resulting state live in
//! [`TrialFlow`]; this component only wires signals to inputs.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::content::{IconKind, site};
use crate::core::flow::{LeadField, TrialFlow, submit_trial};
use crate::core::schedule::format_trial_expiry;
use crate::ui::common::{
    BaseModal, ErrorMessage, FormField, LoadingButton, NextSteps, SuccessMessage, TextAreaField,
};
use crate::ui::context::use_landing_context;

const NEXT_STEPS: &[&str] = &[
    "Você receberá um email com instruções de acesso",
    "Configure sua conta em até 5 minutos",
    "Conecte seu WhatsApp Business",
    "Comece a capturar leads imediatamente",
];

#[component]
pub fn TrialSignupModal() -> impl IntoView {
    let ctx = use_landing_context();
    let flow = RwSignal::new(TrialFlow::default());

    let success = Memo::new(move |_| flow.with(|f| f.success));
    let loading = Memo::new(move |_| flow.with(|f| f.loading));
    let error = Signal::derive(move || flow.with(|f| f.error.clone()));

    let field = move |name: LeadField| {
        Signal::<String>::from(Memo::new(move |_| flow.with(|f| f.fields.get(name).to_string())))
    };
    let edit = move |name: LeadField| Callback::new(move |value: String| flow.update(|f| f.edit(name, value)));

    let close = Callback::new(move |_: ()| {
        if flow.with_untracked(TrialFlow::can_close) {
            flow.update(TrialFlow::reset);
            ctx.trial_open.set(false);
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let mut submission = None;
        flow.update(|f| submission = f.begin_submit());
        let Some(submission) = submission else {
            return;
        };

        let client = ctx.client();
        spawn_local(async move {
            let outcome = submit_trial(&client, &submission).await;
            flow.update(|f| f.finish(outcome));
        });
    };

    let title = Signal::derive(move || {
        if success.get() {
            "Trial Ativado!".to_string()
        } else {
            "Iniciar Trial Gratuito".to_string()
        }
    });
    let icon = Signal::derive(move || {
        if success.get() {
            IconKind::CheckCircle
        } else {
            IconKind::Zap
        }
    });
    let trial_days = site().hero.trial_days;

    view! {
        <BaseModal title=title icon=icon is_open=ctx.trial_open on_close=close>
            <Show
                when=move || success.get()
                fallback=move || view! {
                    <form on:submit=on_submit class="space-y-4" novalidate=true>
                        <ErrorMessage error=error/>

                        <FormField
                            id="name"
                            label="Nome completo"
                            required=true
                            placeholder="Seu nome completo"
                            value=field(LeadField::Name)
                            on_input=edit(LeadField::Name)
                            disabled=loading
                        />
                        <FormField
                            id="email"
                            label="Email"
                            required=true
                            input_type="email"
                            placeholder="seu@email.com"
                            value=field(LeadField::Email)
                            on_input=edit(LeadField::Email)
                            disabled=loading
                        />
                        <FormField
                            id="whatsapp"
                            label="WhatsApp"
                            required=true
                            input_type="tel"
                            placeholder="11999999999"
                            hint="Digite apenas números (ex: 11999999999)"
                            value=field(LeadField::Whatsapp)
                            on_input=edit(LeadField::Whatsapp)
                            disabled=loading
                        />
                        <FormField
                            id="company"
                            label="Empresa"
                            placeholder="Nome da sua empresa"
                            value=field(LeadField::Company)
                            on_input=edit(LeadField::Company)
                            disabled=loading
                        />
                        <TextAreaField
                            id="notes"
                            label="Como podemos ajudar?"
                            placeholder="Conte-nos sobre suas necessidades..."
                            value=field(LeadField::Notes)
                            on_input=edit(LeadField::Notes)
                            disabled=loading
                        />

                        <div class="flex gap-3 pt-4">
                            <button
                                type="button"
                                class="btn-base btn-outline flex-1"
                                on:click=move |_| close.run(())
                                disabled=move || loading.get()
                            >
                                "Cancelar"
                            </button>
                            <LoadingButton
                                loading=loading
                                text="Iniciar Trial"
                                loading_text="Processando..."
                                class="btn-primary"
                            />
                        </div>

                        <p class="text-xs text-gray-500 text-center">
                            "Ao continuar, você concorda com nossos "
                            <a href="/termos" class="text-primary hover:underline">"Termos de Uso"</a>
                            " e "
                            <a href="/privacidade" class="text-primary hover:underline">"Política de Privacidade"</a>
                        </p>
                    </form>
                }
            >
                <div class="space-y-4">
                    <SuccessMessage heading="Parabéns!">
                        " Seu trial de " {trial_days} " dias foi ativado com sucesso."
                        {move || {
                            flow.with(|f| f.trial_expires.clone()).map(|raw| view! {
                                <div class="mt-2 text-sm">
                                    <strong>"Válido até: "</strong>
                                    {format_trial_expiry(&raw, &chrono::Local)}
                                </div>
                            })
                        }}
                    </SuccessMessage>

                    <NextSteps title="Próximos passos:" items=NEXT_STEPS/>

                    <button type="button" class="btn-base btn-primary w-full" on:click=move |_| close.run(())>
                        "Entendi"
                    </button>
                </div>
            </Show>
        </BaseModal>
    }
}
