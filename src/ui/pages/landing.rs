//! Landing page component
//!
//! The st4ck marketing page:
//! - SEO meta tags
//! - Fixed header with anchor navigation and a mobile menu
//! - Hero section with the interactive stack illustration
//! - Animated stats counters
//! - Features section revealed on scroll
//! - Waitlist signup form
//! - Footer

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::core::interactions::MobileMenu;
use crate::ui::icon::{Icon, icons};
use crate::ui::interactions::{smooth_scroll, use_close_menu_on_outside_click, use_navbar_scrolled};
use crate::ui::stack_visual::StackVisual;
use crate::ui::viewport::use_viewport_reactor;
use crate::ui::waitlist_form::WaitlistForm;

const NAV_LINKS: &[(&str, &str)] = &[
    ("#features", "Features"),
    ("#stats", "Why st4ck"),
    ("#waitlist", "Join"),
];

/// Landing page component with scroll-based animations
#[component]
pub fn LandingPage() -> impl IntoView {
    use_viewport_reactor();

    view! {
        <SeoMeta />

        <div class="min-h-screen bg-theme-primary overflow-x-hidden">
            <Header />

            // Hero Section
            <section class="min-h-screen flex items-center justify-center relative pt-16 px-4">
                <div class="max-w-6xl mx-auto grid lg:grid-cols-2 gap-12 items-center">
                    <div class="text-center lg:text-left">
                        <h1 class="text-5xl sm:text-6xl font-bold text-theme-primary mb-6 tracking-tight landing-fade-in-up">
                            "Your whole stack, one surface."
                        </h1>
                        <p class="text-xl text-theme-secondary max-w-xl mb-10 leading-relaxed landing-fade-in-up landing-delay-200">
                            "st4ck pulls docs, tasks, code and chat into a single workspace so your team stops switching tabs."
                        </p>
                        <div class="flex flex-col sm:flex-row items-center gap-4 landing-fade-in-up landing-delay-400">
                            <a
                                href="#waitlist"
                                class="landing-btn-primary"
                                on:click=move |ev| smooth_scroll(&ev, "#waitlist")
                            >
                                "Join the waitlist"
                            </a>
                            <a
                                href="#features"
                                class="landing-btn-secondary"
                                on:click=move |ev| smooth_scroll(&ev, "#features")
                            >
                                "See how it works"
                            </a>
                        </div>
                    </div>
                    <StackVisual />
                </div>
            </section>

            // Stats Section
            <section id="stats" class="py-20 px-4 bg-theme-secondary/10">
                <div class="max-w-5xl mx-auto grid sm:grid-cols-3 gap-8 text-center">
                    <Stat target="12" suffix="" label="tools replaced on average" />
                    <Stat target="40" suffix="%" label="less time spent context switching" />
                    <Stat target="3" suffix="x" label="faster onboarding for new hires" />
                </div>
            </section>

            // Features Section
            <section id="features" class="py-20 px-4">
                <div class="max-w-6xl mx-auto">
                    <div class="text-center mb-16 scroll-reveal">
                        <h2 class="text-3xl sm:text-4xl font-bold text-theme-primary mb-4">
                            "Why st4ck?"
                        </h2>
                        <p class="text-lg text-theme-secondary max-w-2xl mx-auto">
                            "Context lives next to the work, not in another tab."
                        </p>
                    </div>

                    <div class="grid md:grid-cols-3 gap-8">
                        <FeatureCard
                            title="One timeline"
                            description="Docs, tickets and commits land in a single feed your whole team can follow."
                        />
                        <FeatureCard
                            title="Linked context"
                            description="Every task knows the conversation and the code behind it."
                        />
                        <FeatureCard
                            title="Works with your tools"
                            description="Keep Slack, GitHub and Linear. st4ck connects them instead of replacing them."
                        />
                    </div>
                </div>
            </section>

            // Waitlist Section
            <section id="waitlist" class="py-20 px-4 bg-theme-secondary/20">
                <div class="max-w-3xl mx-auto">
                    <div class="text-center mb-10 scroll-reveal">
                        <h2 class="text-3xl sm:text-4xl font-bold text-theme-primary mb-4">
                            "Get early access"
                        </h2>
                        <p class="text-lg text-theme-secondary">
                            "We're onboarding teams in small batches. Tell us a bit about yours."
                        </p>
                    </div>
                    <div class="scroll-reveal">
                        <WaitlistForm />
                    </div>
                </div>
            </section>

            <Footer />

            <LandingStyles />
        </div>
    }
}

/// Header component with mobile menu support
#[component]
fn Header() -> impl IntoView {
    let menu = RwSignal::new(MobileMenu::default());
    let menu_button = NodeRef::<leptos::html::Button>::new();
    let menu_panel = NodeRef::<leptos::html::Div>::new();
    let scrolled = use_navbar_scrolled();

    use_close_menu_on_outside_click(menu, menu_button, menu_panel);

    view! {
        <nav
            class="landing-nav fixed top-0 left-0 right-0 z-50 bg-theme-primary/80 backdrop-blur-md border-b border-theme/50"
            class:scrolled=move || scrolled.get()
        >
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <a href="#" class="flex items-center gap-3 hover:opacity-80 transition-opacity">
                        <Logo />
                        <span class="text-xl font-bold text-theme-primary">"st4ck"</span>
                    </a>

                    // Desktop Navigation
                    <div class="hidden md:flex items-center gap-6">
                        {NAV_LINKS.iter().map(|&(href, label)| view! {
                            <a
                                href=href
                                class="text-sm font-medium text-theme-secondary hover:text-theme-primary transition-colors"
                                on:click=move |ev| smooth_scroll(&ev, href)
                            >
                                {label}
                            </a>
                        }).collect_view()}
                    </div>

                    // Mobile menu button
                    <button
                        node_ref=menu_button
                        class="md:hidden p-2 rounded-lg hover:bg-gray-200 transition-colors"
                        on:click=move |_| menu.update(|m| m.toggle())
                        aria-label="Toggle mobile menu"
                        aria-expanded=move || menu.get().aria_expanded()
                    >
                        {move || {
                            if menu.get().is_open() {
                                view! { <Icon name=icons::X class="w-6 h-6 text-theme-primary" /> }.into_any()
                            } else {
                                view! { <Icon name=icons::MENU class="w-6 h-6 text-theme-primary" /> }.into_any()
                            }
                        }}
                    </button>
                </div>

                // Mobile menu
                <div
                    node_ref=menu_panel
                    class="md:hidden overflow-hidden transition-all duration-300"
                    class:max-h-0=move || !menu.get().is_open()
                    class:max-h-96=move || menu.get().is_open()
                    class:active=move || menu.get().is_open()
                >
                    <div class="py-4 flex flex-col gap-2 border-t border-theme/50">
                        {NAV_LINKS.iter().map(|&(href, label)| view! {
                            <a
                                href=href
                                class="block px-4 py-2 text-sm font-medium text-theme-secondary hover:text-theme-primary hover:bg-theme-secondary/30 rounded-lg transition-colors"
                                on:click=move |ev| {
                                    menu.update(|m| m.close());
                                    smooth_scroll(&ev, href);
                                }
                            >
                                {label}
                            </a>
                        }).collect_view()}
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// One stats figure; the number counts up when it scrolls into view
#[component]
fn Stat(target: &'static str, suffix: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <div class="scroll-reveal">
            <div class="text-5xl font-bold text-theme-primary mb-2">
                <span data-counter=target data-suffix=suffix>"0"{suffix}</span>
            </div>
            <p class="text-theme-secondary">{label}</p>
        </div>
    }
}

/// Feature card component
#[component]
fn FeatureCard(title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="scroll-reveal bg-theme-primary p-6 rounded-xl border border-theme hover:border-accent-primary/50
                    transition-all duration-300 hover:shadow-lg hover:-translate-y-1">
            <h3 class="text-lg font-semibold text-theme-primary mb-2">{title}</h3>
            <p class="text-theme-secondary text-sm leading-relaxed">{description}</p>
        </div>
    }
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="st4ck - Your whole stack, one surface" />

        <Meta name="description" content="st4ck brings docs, tasks, code and chat into one workspace. Join the waitlist for early access." />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:url" content="https://st4ck.io/" />
        <Meta property="og:title" content="st4ck - Your whole stack, one surface" />
        <Meta property="og:description" content="Docs, tasks, code and chat in one workspace." />

        // Twitter
        <Meta property="twitter:card" content="summary_large_image" />
        <Meta property="twitter:title" content="st4ck - Your whole stack, one surface" />

        <Link rel="canonical" href="https://st4ck.io/" />
    }
}

/// Logo component
#[component]
fn Logo() -> impl IntoView {
    view! {
        <div class="w-10 h-10 bg-gradient-to-br from-accent-primary to-blue-600 rounded-xl
                    flex items-center justify-center shadow-lg">
            <svg class="w-6 h-6 text-white" fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 7l8-4 8 4-8 4-8-4z" />
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 12l8 4 8-4M4 17l8 4 8-4" />
            </svg>
        </div>
    }
}

/// Footer component
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="py-12 border-t border-theme bg-theme-primary">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 flex flex-col sm:flex-row items-center justify-between gap-4">
                <div class="flex items-center gap-3">
                    <Logo />
                    <span class="text-xl font-bold text-theme-primary">"st4ck"</span>
                </div>
                <span class="text-sm text-theme-tertiary">"© 2025 st4ck. Built with Rust & Leptos."</span>
            </div>
        </footer>
    }
}

/// CSS styles for landing page animations
#[component]
fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            /* Button styles */
            .landing-btn-primary {
                display: inline-flex;
                align-items: center;
                padding: 0.875rem 1.75rem;
                font-weight: 600;
                color: white;
                background-color: #2563eb;
                border-radius: 0.75rem;
                transition: all 0.3s;
                box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                cursor: pointer;
            }
            .landing-btn-primary:hover:not(:disabled) {
                transform: scale(1.05);
                background-color: #1d4ed8;
            }

            .landing-btn-secondary {
                display: inline-flex;
                align-items: center;
                padding: 0.875rem 1.75rem;
                font-weight: 600;
                border: 2px solid #9ca3af;
                border-radius: 0.75rem;
                transition: all 0.3s;
                background-color: #f9fafb;
                color: #374151;
                cursor: pointer;
            }
            .landing-btn-secondary:hover {
                transform: scale(1.05);
            }

            /* Fade in up animation */
            @keyframes landing-fade-in-up {
                from { opacity: 0; transform: translateY(20px); }
                to { opacity: 1; transform: translateY(0); }
            }
            .landing-fade-in-up { animation: landing-fade-in-up 0.6s ease-out forwards; }
            .landing-delay-200 { animation-delay: 0.2s; opacity: 0; }
            .landing-delay-400 { animation-delay: 0.4s; opacity: 0; }

            /* Scroll reveal */
            .scroll-reveal {
                opacity: 0;
                transform: translateY(30px);
                transition: opacity 0.6s ease-out, transform 0.6s ease-out;
            }
            .scroll-reveal.revealed {
                opacity: 1;
                transform: translateY(0);
            }

            /* Navbar */
            .landing-nav { transition: box-shadow 0.3s, background-color 0.3s; }
            .landing-nav.scrolled {
                background-color: rgba(255, 255, 255, 0.95);
                box-shadow: 0 4px 12px rgba(0, 0, 0, 0.08);
            }

            /* Stack illustration */
            @keyframes stack-layer-in {
                from { opacity: 0; transform: translateY(16px); }
                to { opacity: 1; transform: translateY(0); }
            }
            .stack-visual {
                display: flex;
                flex-direction: column;
                gap: 0.75rem;
                perspective: 800px;
            }
            .stack-layer {
                display: flex;
                flex-direction: column;
                padding: 1rem 1.25rem;
                border-radius: 0.75rem;
                border: 1px solid rgba(148, 163, 184, 0.4);
                background: linear-gradient(135deg, rgba(37, 99, 235, 0.08), rgba(37, 99, 235, 0.02));
                transition: opacity 0.3s, transform 0.3s;
                animation: stack-layer-in 0.6s ease-out both;
            }
            .stack-layer-title { font-weight: 600; }
            .stack-layer-caption { font-size: 0.875rem; opacity: 0.7; }
            "#
        </style>
    }
}
