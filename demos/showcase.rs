use gpui::{
    App, AppContext, Application, Bounds, Context, ElementId, SharedString, TitlebarOptions, Window,
    WindowBounds, WindowOptions, div, point, prelude::*, px, size,
};

use gpui_palette::{
    PaletteAssets, PaletteIconKind, assets,
    components::{Button, ButtonColors, ButtonSize, ButtonVariant},
    theme::{ColorSelector, ColorTokenKind, ThemeExt, ThemeKind},
};

struct Showcase {
    is_loading: bool,
    presses: usize,
}

impl Showcase {
    fn variant_row(&self, size: ButtonSize, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .flex()
            .flex_row()
            .flex_wrap()
            .gap(px(12.))
            .children(ButtonVariant::ALL.into_iter().map(|variant| {
                let label: SharedString = format!("{variant:?}").into();

                Button::new(ElementId::Name(format!("{variant:?}-{size:?}").into()), label)
                    .variant(variant)
                    .size(size)
                    .loading(self.is_loading)
                    .on_click(cx.listener(|view, _event, _window, cx| {
                        view.presses += 1;
                        cx.notify();
                    }))
            }))
    }
}

impl Render for Showcase {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let kind = cx.get_theme().kind;
        let background = cx
            .theme_color(ColorTokenKind::Background)
            .resolve(ColorSelector::Base);
        let text = cx
            .theme_color(ColorTokenKind::Text)
            .resolve(ColorSelector::On);

        div()
            .size_full()
            .bg(background)
            .text_color(text)
            .flex()
            .flex_col()
            .gap(px(24.))
            .p(px(48.))
            .child(format!("Pressed {} times", self.presses))
            .child(self.variant_row(ButtonSize::Normal, cx))
            .child(self.variant_row(ButtonSize::Small, cx))
            .child(
                div()
                    .flex()
                    .flex_row()
                    .gap(px(12.))
                    .child(
                        Button::new("toggle-theme", format!("Switch to {:?}", kind.toggled()))
                            .variant(ButtonVariant::Outline)
                            .start_icon(PaletteIconKind::ArrowRight)
                            .on_click(move |_event, _window, cx| {
                                if let Err(err) = cx.set_theme_kind(kind.toggled()) {
                                    log::error!("{err}");
                                }
                            }),
                    )
                    .child(
                        Button::new(
                            "toggle-loading",
                            if self.is_loading { "Stop loading" } else { "Start loading" },
                        )
                        .variant(ButtonVariant::Ghost)
                        .start_icon(PaletteIconKind::Plus)
                        .on_click(cx.listener(|view, _event, _window, cx| {
                            view.is_loading = !view.is_loading;
                            cx.notify();
                        })),
                    )
                    .child(
                        Button::new("custom", "Custom colors")
                            .variant(ButtonColors {
                                background: gpui::rgb(0x7c3aed),
                                foreground: gpui::rgb(0xffffff),
                                border: None,
                            })
                            .start_icon(PaletteIconKind::Check),
                    )
                    .child(
                        Button::new("disabled", "Disabled")
                            .variant(ButtonVariant::Danger)
                            .start_icon(PaletteIconKind::Trash)
                            .disabled(true),
                    ),
            )
    }
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("gpui_palette=debug,showcase=info"),
    )
    .init();

    Application::new()
        .with_quit_mode(gpui::QuitMode::LastWindowClosed)
        .with_assets(assets![PaletteAssets])
        .run(|cx: &mut App| {
            gpui_palette::init(cx, ThemeKind::Light);

            let bounds = Bounds::centered(None, size(px(860.), px(520.)), cx);

            let window = cx.open_window(
                WindowOptions {
                    window_bounds: Some(WindowBounds::Windowed(bounds)),
                    titlebar: Some(TitlebarOptions {
                        appears_transparent: true,
                        traffic_light_position: Some(point(px(10.), px(10.))),
                        ..Default::default()
                    }),
                    ..Default::default()
                },
                |_window, cx| {
                    cx.new(|_cx| Showcase {
                        is_loading: false,
                        presses: 0,
                    })
                },
            );

            if let Err(err) = window {
                log::error!("failed to open the showcase window: {err}");
                cx.quit();
                return;
            }

            cx.activate(true);
        });
}
