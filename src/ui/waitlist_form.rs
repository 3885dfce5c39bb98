//! Multi-step waitlist signup form
//!
//! The page side of the waitlist: reactive signals implement `FormView`, and a
//! single `WaitlistController` stored in the component drives them.

use std::collections::BTreeSet;
use std::time::Duration;

use leptos::prelude::*;

use crate::core::{FormFields, FormView, Step, WaitlistConfig, WaitlistController};
use crate::ui::common::{CheckboxField, FormField, SelectField, TextAreaField};
use crate::ui::icon::{Icon, icons};

/// Submit button label when idle
pub const SUBMIT_LABEL: &str = "Join the waitlist";

const ROLE_OPTIONS: &[(&str, &str)] = &[
    ("founder", "Founder / Executive"),
    ("engineering", "Engineering"),
    ("product", "Product"),
    ("design", "Design"),
    ("operations", "Operations"),
    ("other", "Other"),
];

const COMPANY_SIZE_OPTIONS: &[(&str, &str)] = &[
    ("1", "Just me"),
    ("2-10", "2-10"),
    ("11-50", "11-50"),
    ("51-200", "51-200"),
    ("201+", "201+"),
];

const TOOL_OPTIONS: &[(&str, &str)] = &[
    ("notion", "Notion"),
    ("slack", "Slack"),
    ("linear", "Linear"),
    ("jira", "Jira"),
    ("github", "GitHub"),
    ("figma", "Figma"),
];

/// Reactive state of every form element the controller touches
#[derive(Clone, Copy)]
pub struct FormSignals {
    pub email: RwSignal<String>,
    pub role: RwSignal<String>,
    pub company_size: RwSignal<String>,
    pub pain_point: RwSignal<String>,
    pub excitement_reason: RwSignal<String>,
    pub tools: RwSignal<BTreeSet<String>>,
    pub step: RwSignal<Step>,
    pub indicators: RwSignal<[bool; 3]>,
    pub email_invalid: RwSignal<bool>,
    pub submit_enabled: RwSignal<bool>,
    pub submit_label: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    /// Bumped on every email flag so an older timer never clears a newer flag
    flag_generation: RwSignal<u32>,
}

impl FormSignals {
    pub fn new() -> Self {
        Self {
            email: RwSignal::new(String::new()),
            role: RwSignal::new(String::new()),
            company_size: RwSignal::new(String::new()),
            pain_point: RwSignal::new(String::new()),
            excitement_reason: RwSignal::new(String::new()),
            tools: RwSignal::new(BTreeSet::new()),
            step: RwSignal::new(Step::One),
            indicators: RwSignal::new([true, false, false]),
            email_invalid: RwSignal::new(false),
            submit_enabled: RwSignal::new(true),
            submit_label: RwSignal::new(SUBMIT_LABEL.to_string()),
            error: RwSignal::new(None),
            flag_generation: RwSignal::new(0),
        }
    }

    fn toggle_tool(&self, tool: &str, checked: bool) {
        self.tools.update(|tools| {
            if checked {
                tools.insert(tool.to_string());
            } else {
                tools.remove(tool);
            }
        });
    }
}

impl Default for FormSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl FormView for FormSignals {
    fn read_fields(&self) -> FormFields {
        FormFields {
            email: self.email.get_untracked(),
            role: self.role.get_untracked(),
            company_size: self.company_size.get_untracked(),
            pain_point: self.pain_point.get_untracked(),
            excitement_reason: self.excitement_reason.get_untracked(),
        }
    }

    fn read_selected_tools(&self) -> BTreeSet<String> {
        self.tools.get_untracked()
    }

    fn show_step(&mut self, step: Step) {
        self.step.set(step);
    }

    fn set_indicators(&mut self, active: [bool; 3]) {
        self.indicators.set(active);
    }

    fn flag_email(&mut self, duration: Duration) {
        let generation = self.flag_generation.get_untracked().wrapping_add(1);
        self.flag_generation.set(generation);
        self.email_invalid.set(true);

        #[cfg(feature = "hydrate")]
        {
            use gloo_timers::future::TimeoutFuture;
            use leptos::task::spawn_local;

            let email_invalid = self.email_invalid;
            let flag_generation = self.flag_generation;
            let ms = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
            spawn_local(async move {
                TimeoutFuture::new(ms).await;
                if flag_generation.try_get_untracked() == Some(generation) {
                    email_invalid.try_set(false);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = duration;
        }
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.submit_enabled.set(enabled);
    }

    fn submit_label(&self) -> String {
        self.submit_label.get_untracked()
    }

    fn set_submit_label(&mut self, label: &str) {
        self.submit_label.set(label.to_string());
    }

    fn show_error(&mut self, message: Option<&str>) {
        self.error.set(message.map(str::to_string));
    }

    fn clear_inputs(&mut self) {
        for field in [
            self.email,
            self.role,
            self.company_size,
            self.pain_point,
            self.excitement_reason,
        ] {
            field.set(String::new());
        }
        self.tools.set(BTreeSet::new());
        self.email_invalid.set(false);
    }
}

fn waitlist_config() -> WaitlistConfig {
    #[cfg(feature = "hydrate")]
    {
        WaitlistConfig::from_document()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        WaitlistConfig::default()
    }
}

/// Waitlist signup form: email, then profile, then tools and submit
#[component]
pub fn WaitlistForm() -> impl IntoView {
    let signals = FormSignals::new();
    let controller = StoredValue::new(WaitlistController::new(signals, waitlist_config()));

    let advance = move |from: Step| {
        controller.update_value(|c| {
            let _ = c.advance(from);
        });
    };
    let retreat = move |from: Step| {
        controller.update_value(|c| {
            let _ = c.retreat(from);
        });
    };
    let retry = move |_| {
        controller.update_value(|c| {
            let _ = c.retry();
        });
    };
    let reset = move |_| controller.update_value(|c| c.reset());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        // Enter in an earlier step's input submits the form; treat it as "Continue"
        let step = controller.with_value(|c| c.current_step());
        if matches!(step, Step::One | Step::Two) {
            advance(step);
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            use crate::core::{GlooTransport, PageContext, WaitlistTransport};
            use leptos::task::spawn_local;

            let page = PageContext::from_window();
            let Some(payload) = controller
                .try_update_value(|c| c.begin_submit(&page))
                .flatten()
            else {
                return;
            };
            let endpoint = controller.with_value(|c| c.config().endpoint.clone());

            spawn_local(async move {
                let outcome = GlooTransport.submit(&endpoint, &payload).await;
                controller.try_update_value(|c| c.finish_submit(outcome));
            });
        }
    };

    view! {
        <div class="w-full max-w-xl mx-auto bg-theme-primary rounded-xl shadow-lg p-6 border border-theme">
            <StepIndicators indicators=signals.indicators />

            <form on:submit=on_submit class="space-y-5" novalidate=true>
                // Step 1: email
                <div class="space-y-5" class:hidden=move || signals.step.get() != Step::One data-step="1">
                    <FormField
                        label="Work email"
                        name="email"
                        input_type="email"
                        required=true
                        placeholder="you@company.com"
                        value=signals.email
                        invalid=signals.email_invalid
                        hint="Please enter a valid email"
                    />
                    <div class="flex justify-end">
                        <button type="button" class="landing-btn-primary" on:click=move |_| advance(Step::One)>
                            "Continue"
                            <Icon name=icons::ARROW_RIGHT class="w-4 h-4 ml-2" />
                        </button>
                    </div>
                </div>

                // Step 2: optional profile
                <div class="space-y-5" class:hidden=move || signals.step.get() != Step::Two data-step="2">
                    <SelectField label="Your role" name="role" value=signals.role options=ROLE_OPTIONS />
                    <SelectField
                        label="Company size"
                        name="companySize"
                        value=signals.company_size
                        options=COMPANY_SIZE_OPTIONS
                    />
                    <TextAreaField
                        label="What slows your team down today?"
                        name="painPoint"
                        placeholder="Too many tools, not enough context..."
                        value=signals.pain_point
                    />
                    <StepNav on_back=move || retreat(Step::Two) on_next=move || advance(Step::Two) />
                </div>

                // Step 3: tools and submit
                <div class="space-y-5" class:hidden=move || signals.step.get() != Step::Three data-step="3">
                    <fieldset class="space-y-2">
                        <legend class="label">"Which tools do you use today?"</legend>
                        <div class="grid grid-cols-2 gap-2">
                            {TOOL_OPTIONS.iter().map(|&(value, label)| {
                                view! {
                                    <CheckboxField
                                        label=label
                                        value=value
                                        checked=Signal::derive(move || signals.tools.with(|t| t.contains(value)))
                                        on_change=Callback::new(move |checked| signals.toggle_tool(value, checked))
                                    />
                                }
                            }).collect_view()}
                        </div>
                    </fieldset>
                    <TextAreaField
                        label="What excites you most about st4ck?"
                        name="excitementReason"
                        value=signals.excitement_reason
                        rows=2
                    />
                    <div class="flex items-center justify-between">
                        <button type="button" class="landing-btn-secondary" on:click=move |_| retreat(Step::Three)>
                            <Icon name=icons::ARROW_LEFT class="w-4 h-4 mr-2" />
                            "Back"
                        </button>
                        <button
                            type="submit"
                            class="landing-btn-primary disabled:opacity-50 disabled:cursor-not-allowed"
                            disabled=move || !signals.submit_enabled.get()
                        >
                            {move || (!signals.submit_enabled.get()).then(|| view! {
                                <Icon name=icons::LOADER class="animate-spin -ml-1 mr-2 h-4 w-4" />
                            })}
                            {move || signals.submit_label.get()}
                        </button>
                    </div>
                </div>
            </form>

            // Terminal displays
            <div class="text-center space-y-4" class:hidden=move || signals.step.get() != Step::Success data-step="success">
                <div class="w-12 h-12 mx-auto rounded-full bg-green-500/10 flex items-center justify-center">
                    <Icon name=icons::CHECK class="w-6 h-6" />
                </div>
                <h3 class="text-xl font-semibold text-theme-primary">"You're on the list!"</h3>
                <p class="text-theme-secondary">"We'll email you as soon as your spot opens up."</p>
                <button type="button" class="landing-btn-secondary" on:click=reset>
                    "Sign up someone else"
                </button>
            </div>

            <div class="text-center space-y-4" class:hidden=move || signals.step.get() != Step::Error data-step="error">
                <h3 class="text-xl font-semibold text-theme-primary">"Something went wrong"</h3>
                <div class="flex items-center justify-center gap-2 text-sm text-red-500" role="alert">
                    <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                    <span>{move || signals.error.get().unwrap_or_default()}</span>
                </div>
                <div class="flex items-center justify-center gap-3">
                    <button type="button" class="landing-btn-primary" on:click=retry>
                        "Try again"
                    </button>
                    <button type="button" class="landing-btn-secondary" on:click=reset>
                        "Start over"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Three dots showing progress through the numbered steps
#[component]
fn StepIndicators(indicators: RwSignal<[bool; 3]>) -> impl IntoView {
    view! {
        <div class="flex items-center justify-center gap-2 mb-6" aria-hidden="true">
            {(0..3usize).map(|i| {
                let active = move || indicators.get()[i];
                view! {
                    <div
                        class="h-2 w-10 rounded-full transition-colors duration-300"
                        class:bg-accent-primary=active
                        class:bg-gray-300=move || !active()
                        data-indicator=(i + 1).to_string()
                    ></div>
                }
            }).collect_view()}
        </div>
    }
}

/// Back / continue buttons for the middle step
#[component]
fn StepNav(
    on_back: impl Fn() + Send + Sync + 'static,
    on_next: impl Fn() + Send + Sync + 'static,
) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between">
            <button type="button" class="landing-btn-secondary" on:click=move |_| on_back()>
                <Icon name=icons::ARROW_LEFT class="w-4 h-4 mr-2" />
                "Back"
            </button>
            <button type="button" class="landing-btn-primary" on:click=move |_| on_next()>
                "Continue"
                <Icon name=icons::ARROW_RIGHT class="w-4 h-4 ml-2" />
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PageContext;

    #[test]
    fn test_signals_drive_controller() {
        let owner = Owner::new();
        owner.with(|| {
            let signals = FormSignals::new();
            let mut controller = WaitlistController::new(signals, WaitlistConfig::default());

            signals.email.set("nope".to_string());
            assert!(controller.advance(Step::One).is_err());
            assert!(signals.email_invalid.get_untracked());
            assert_eq!(signals.step.get_untracked(), Step::One);

            signals.email.set("a@b.com".to_string());
            controller.advance(Step::One).unwrap();
            controller.advance(Step::Two).unwrap();
            assert_eq!(signals.step.get_untracked(), Step::Three);
            assert_eq!(signals.indicators.get_untracked(), [true, true, true]);

            signals.toggle_tool("slack", true);
            let payload = controller.begin_submit(&PageContext::default()).unwrap();
            assert_eq!(payload.current_tools, vec!["slack"]);
            assert!(!signals.submit_enabled.get_untracked());
            assert_eq!(signals.submit_label.get_untracked(), "Joining...");

            controller.finish_submit(Ok(()));
            assert_eq!(signals.step.get_untracked(), Step::Success);
            assert!(signals.submit_enabled.get_untracked());
            assert_eq!(signals.submit_label.get_untracked(), SUBMIT_LABEL);

            controller.reset();
            assert!(signals.email.get_untracked().is_empty());
            assert!(signals.tools.get_untracked().is_empty());
            assert_eq!(signals.step.get_untracked(), Step::One);
        });
    }

    #[test]
    fn test_submit_before_step_three_sends_nothing() {
        let owner = Owner::new();
        owner.with(|| {
            let signals = FormSignals::new();
            let mut controller = WaitlistController::new(signals, WaitlistConfig::default());

            assert!(controller.begin_submit(&PageContext::default()).is_none());
            assert_eq!(signals.step.get_untracked(), Step::One);
            assert!(signals.submit_enabled.get_untracked());
            assert_eq!(signals.submit_label.get_untracked(), SUBMIT_LABEL);

            signals.email.set("a@b.com".to_string());
            controller.advance(Step::One).unwrap();
            assert!(controller.begin_submit(&PageContext::default()).is_none());
            assert_eq!(signals.step.get_untracked(), Step::Two);
            assert!(!controller.is_submitting());
        });
    }
}
