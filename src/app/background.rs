use leptos::either::Either;
use leptos::{ev, prelude::*};
use leptos_use::{use_document_visibility, use_media_query};
use web_sys::VisibilityState;

use crate::background::{
    icon_columns, simple_particles, BackgroundError, BackgroundMode, DeviceProfile,
    ModeController, ICON_POOL, LOAD_GRACE,
};

const BACKGROUND_CSS: &str = "\
@keyframes icon-fall {\
  from { transform: translateY(-60px); }\
  to { transform: translateY(calc(100vh + 60px)); }\
}\
@keyframes float {\
  0%, 100% { transform: translateY(0); opacity: 0.35; }\
  50% { transform: translateY(-18px); opacity: 0.7; }\
}\
.bg-paused * { animation-play-state: paused !important; }";

/// Full-viewport decorative layer behind the page content. Never
/// interactive, so it sits below everything and ignores pointer events.
#[component]
pub fn AmbientBackground() -> impl IntoView {
    // The server has no device signals, so it always renders the cheap
    // tier; a capable client upgrades itself right after hydration.
    let (mode, set_mode) = signal(BackgroundMode::Simple);
    let (width, set_width) = signal(0.0_f64);

    let controller = StoredValue::new(None::<ModeController>);
    let grace_timer = StoredValue::new_local(None::<TimeoutHandle>);
    let load_listener = StoredValue::new_local(None::<WindowListenerHandle>);

    Effect::watch(
        || (),
        move |_, _, _| {
            let profile = detect_profile();
            set_width.set(profile.viewport_width);

            let fresh = ModeController::new(profile);
            set_mode.set(fresh.mode());
            let settled = fresh.is_settled();
            controller.set_value(Some(fresh));
            if settled {
                return;
            }

            if document().ready_state() == "complete" {
                controller.update_value(|c| {
                    if let Some(c) = c {
                        set_mode.set(c.on_load());
                    }
                });
                return;
            }

            let timer = set_timeout_with_handle(
                move || {
                    controller.update_value(|c| {
                        if let Some(c) = c {
                            let _ = set_mode.try_set(c.on_deadline());
                        }
                    });
                },
                LOAD_GRACE,
            );
            grace_timer.set_value(timer.ok());

            let listener = window_event_listener(ev::load, move |_| {
                controller.update_value(|c| {
                    if let Some(c) = c {
                        let _ = set_mode.try_set(c.on_load());
                    }
                });
                // The decision is settled; the deadline no longer matters.
                grace_timer.update_value(|t| {
                    if let Some(t) = t.take() {
                        t.clear();
                    }
                });
            });
            load_listener.set_value(Some(listener));
        },
        true,
    );

    on_cleanup(move || {
        grace_timer.update_value(|t| {
            if let Some(t) = t.take() {
                t.clear();
            }
        });
        load_listener.update_value(|l| {
            if let Some(l) = l.take() {
                l.remove();
            }
        });
    });

    let visibility = use_document_visibility();
    let coarse_pointer = use_media_query("(pointer: coarse)");

    let wrapper_class = move || {
        if visibility.get() == VisibilityState::Hidden {
            "fixed inset-0 overflow-hidden pointer-events-none z-0 bg-paused"
        } else {
            "fixed inset-0 overflow-hidden pointer-events-none z-0"
        }
    };

    view! {
        <div class=wrapper_class aria-hidden="true">
            <style>{BACKGROUND_CSS}</style>
            {move || match mode.get() {
                BackgroundMode::Simple => Either::Left(view! { <SimpleBackground /> }),
                BackgroundMode::Detailed => {
                    Either::Right(
                        view! {
                            <ErrorBoundary fallback=|_| view! { <SimpleBackground /> }>
                                <DetailedBackground
                                    viewport_width=width.get()
                                    coarse_pointer=coarse_pointer.get()
                                />
                            </ErrorBoundary>
                        },
                    )
                }
            }}
        </div>
    }
}

/// Device signals sampled from the browser at mount.
fn detect_profile() -> DeviceProfile {
    let window = window();
    let viewport_width = window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0);
    let logical_cores = window.navigator().hardware_concurrency() as u32;
    DeviceProfile {
        viewport_width,
        logical_cores,
    }
}

/// Falling tech icons, one animated column per viewport track. Coarse
/// pointer devices get plain positioned images; everything else gets one
/// SVG so the columns share a single compositing layer.
#[component]
fn DetailedBackground(
    viewport_width: f64,
    coarse_pointer: bool,
) -> Result<impl IntoView, BackgroundError> {
    let columns = icon_columns(viewport_width);
    if columns.is_empty() {
        return Err(BackgroundError::NoTracks);
    }

    let body = if coarse_pointer {
        Either::Left(
            columns
                .iter()
                .map(|col| {
                    view! {
                        <img
                            src=ICON_POOL[col.icon_index]
                            alt=""
                            class="absolute w-8 h-8 opacity-20"
                            style=format!(
                                "left: {}px; top: {}px; animation: icon-fall {}s linear {}s infinite;",
                                col.x, col.start_y, col.duration_secs, col.delay_secs,
                            )
                        />
                    }
                })
                .collect_view(),
        )
    } else {
        Either::Right(
            view! {
                <svg
                    class="w-full h-full opacity-20"
                    viewBox=format!("0 0 {} 1080", viewport_width as u32)
                    preserveAspectRatio="xMidYMid slice"
                >
                    {columns
                        .iter()
                        .map(|col| {
                            view! {
                                <image
                                    href=ICON_POOL[col.icon_index]
                                    x=col.x.to_string()
                                    y=col.start_y.to_string()
                                    width="32"
                                    height="32"
                                    style=format!(
                                        "animation: icon-fall {}s linear {}s infinite;",
                                        col.duration_secs, col.delay_secs,
                                    )
                                />
                            }
                        })
                        .collect_view()}
                </svg>
            },
        )
    };

    Ok(body)
}

/// A handful of slowly drifting dots. Cheap enough for any device.
#[component]
fn SimpleBackground() -> impl IntoView {
    view! {
        <div class="w-full h-full">
            {simple_particles()
                .into_iter()
                .map(|p| {
                    view! {
                        <span
                            class="absolute w-2 h-2 rounded-full bg-primary/30"
                            style=format!(
                                "left: {}%; top: {}%; animation: float {}s ease-in-out {}s infinite;",
                                p.left_pct, p.top_pct, p.duration_secs, p.delay_secs,
                            )
                        ></span>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pause_rule_outranks_inline_animation_shorthands() {
        // Every animated element sets its animation via an inline style, and
        // the `animation` shorthand resets play-state to running at
        // inline-style priority. The pause rule only wins with !important.
        assert!(BACKGROUND_CSS
            .contains(".bg-paused * { animation-play-state: paused !important; }"));
    }
}
