//! The mocked financial advice panel.

use maud::{Markup, html};

use crate::{endpoints, html::BUTTON_SECONDARY_STYLE};

const STANDARD_ADVICE: &str = "Based on your current (mocked) spending, consider allocating \
    more towards savings. Setting up automatic transfers to a high-yield savings account can be \
    beneficial. Also, review your recurring subscriptions for potential savings.";

const TOUGH_LOVE_ADVICE: &str = "Alright, look... money. It's like that one relative nobody \
    likes but everyone needs, you know? You got some, you spend it on stupid stuff. You don't got \
    some, well, that's even worse. My advice? Try not to be the guy who buys a speedboat with his \
    rent money. Unless it's a REALLY nice speedboat. What do I know? I'm just a bunch of text.";

/// Which advice text to show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(super) enum AdviceMode {
    #[default]
    Standard,
    ToughLove,
}

impl AdviceMode {
    pub(super) fn from_flag(tough_love: bool) -> Self {
        if tough_love {
            AdviceMode::ToughLove
        } else {
            AdviceMode::Standard
        }
    }

    fn text(self) -> &'static str {
        match self {
            AdviceMode::Standard => STANDARD_ADVICE,
            AdviceMode::ToughLove => TOUGH_LOVE_ADVICE,
        }
    }
}

/// Whether the panel is shown and which advice it shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(super) struct AdviceOptions {
    pub open: bool,
    pub mode: AdviceMode,
}

impl AdviceOptions {
    /// The dashboard URL that renders these options.
    pub(super) fn to_url(self) -> String {
        match (self.open, self.mode) {
            (false, AdviceMode::Standard) => endpoints::DASHBOARD_VIEW.to_owned(),
            (false, AdviceMode::ToughLove) => format!("{}?tough_love=true", endpoints::DASHBOARD_VIEW),
            (true, AdviceMode::Standard) => format!("{}?advice=open", endpoints::DASHBOARD_VIEW),
            (true, AdviceMode::ToughLove) => {
                format!("{}?advice=open&tough_love=true", endpoints::DASHBOARD_VIEW)
            }
        }
    }
}

/// Renders the toggle button and, when open, the advice panel.
///
/// The tough love switch reloads just the panel with htmx and keeps the
/// address bar in sync so a refresh shows the same advice.
pub(super) fn advice_view(options: AdviceOptions) -> Markup {
    let toggled = AdviceOptions {
        open: !options.open,
        ..options
    };
    let is_tough_love = options.mode == AdviceMode::ToughLove;

    html! {
        section id="advice" class="w-full"
        {
            a
                href=(toggled.to_url())
                id="advice-toggle"
                class={ (BUTTON_SECONDARY_STYLE) " block text-center" }
                aria-expanded=(if options.open { "true" } else { "false" })
            {
                "Show/Hide AI Financial Advice"
            }

            @if options.open {
                div id="advice-panel" class="rounded-lg bg-white dark:bg-gray-800 p-6 shadow space-y-4"
                {
                    h3 class="text-xl font-semibold" { "AI Financial Advice" }

                    form
                        hx-get=(endpoints::DASHBOARD_VIEW)
                        hx-trigger="change"
                        hx-select="#advice-panel"
                        hx-target="#advice-panel"
                        hx-swap="outerHTML"
                        hx-push-url="true"
                    {
                        input type="hidden" name="advice" value="open";

                        label class="inline-flex items-center gap-2 cursor-pointer"
                        {
                            input
                                type="checkbox"
                                name="tough_love"
                                value="true"
                                checked[is_tough_love]
                                class="h-4 w-4";
                            "Toggle \"Tough Love\" mode"
                        }
                    }

                    p id="advice-text" { (options.mode.text()) }

                    p class="text-xs text-gray-500 dark:text-gray-400"
                    {
                        "(This is mocked advice. Consult a professional for real financial planning.)"
                    }
                }
            }
        }
    }
}
