use std::rc::Rc;

use gpui::{
    App, ClickEvent, CursorStyle, DefiniteLength, Edges, ElementId, Entity, FontWeight,
    InteractiveElement,
    IntoElement, Length, MouseButton, MouseDownEvent, MouseUpEvent, ParentElement, Pixels,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window, div,
    prelude::FluentBuilder, px, relative,
};
use gpui_squircle::{SquircleStyled, squircle};
use gpui_transitions::TransitionExt;

use crate::{
    components::{Icon, LoadingIndicator},
    utils::{ElementIdExt, RgbaExt, disabled_transition, press_scale_transition},
};

mod press;
pub use press::*;

mod size;
pub use size::*;

mod variant;
pub use variant::*;

const CORNER_RADIUS: Pixels = px(12.);
const CONTENT_GAP: Pixels = px(8.);

type PressStartHandler = Box<dyn Fn(&MouseDownEvent, &mut Window, &mut App) + 'static>;
type PressEndHandler = Rc<dyn Fn(&MouseUpEvent, &mut Window, &mut App) + 'static>;

struct ButtonStyles {
    padding: Edges<Option<DefiniteLength>>,
    width: Length,
    text_size: Option<Pixels>,
}

impl Default for ButtonStyles {
    fn default() -> Self {
        Self {
            padding: Edges::default(),
            width: Length::Auto,
            text_size: None,
        }
    }
}

/// A themed button that shrinks slightly while pressed.
///
/// Colors come from the active theme through the button's [`ButtonVariant`],
/// so a theme must be established with
/// [`ThemeExt::set_theme`](gpui_palette_theme::ThemeExt::set_theme) before it
/// renders.
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    variant: ButtonVariantEither,
    size: ButtonSize,
    is_loading: bool,
    disabled: Option<bool>,
    start_icon: Option<SharedString>,
    press_animation: PressAnimation,
    press_state: Option<Entity<PressState>>,
    on_press_start: Option<PressStartHandler>,
    on_press_end: Option<PressEndHandler>,
    on_hover: Option<Box<dyn Fn(&bool, &mut Window, &mut App) + 'static>>,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
    style: ButtonStyles,
}

impl Button {
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            variant: ButtonVariantEither::Left(ButtonVariant::Primary),
            size: ButtonSize::Normal,
            is_loading: false,
            disabled: None,
            start_icon: None,
            press_animation: PressAnimation::default(),
            press_state: None,
            on_press_start: None,
            on_press_end: None,
            on_hover: None,
            on_click: None,
            style: ButtonStyles::default(),
        }
    }

    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = label.into();
        self
    }

    #[allow(private_bounds)]
    pub fn variant(mut self, variant: impl Into<ButtonVariantEither>) -> Self {
        self.variant = variant.into();
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Replaces the content with a loading indicator. Also disables the
    /// button unless [`Button::disabled`] says otherwise.
    ///
    /// A button that becomes disabled mid-press (for example when
    /// `on_press_start` starts loading) drops the press without calling
    /// `on_press_end`, since there is no release event to report.
    pub fn loading(mut self, is_loading: bool) -> Self {
        self.is_loading = is_loading;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = Some(disabled);
        self
    }

    /// Whether the button ignores input. Falls back to the loading flag.
    pub fn is_disabled(&self) -> bool {
        self.disabled.unwrap_or(self.is_loading)
    }

    /// Sets an icon shown before the label, by asset path.
    pub fn start_icon(mut self, icon: impl Into<SharedString>) -> Self {
        self.start_icon = Some(icon.into());
        self
    }

    pub fn press_animation(mut self, press_animation: PressAnimation) -> Self {
        self.press_animation = press_animation;
        self
    }

    /// Uses a caller-owned press state instead of one keyed by the button id.
    pub fn press_state(mut self, press_state: Entity<PressState>) -> Self {
        self.press_state = Some(press_state);
        self
    }

    /// Called with the original event after a press begins.
    pub fn on_press_start(
        mut self,
        on_press_start: impl Fn(&MouseDownEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_press_start = Some(Box::new(on_press_start));
        self
    }

    /// Called with the original event after a press ends, whether the
    /// pointer was released inside the button or not. Not called for a
    /// press dropped because the button became disabled.
    pub fn on_press_end(
        mut self,
        on_press_end: impl Fn(&MouseUpEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_press_end = Some(Rc::new(on_press_end));
        self
    }

    pub fn on_hover(mut self, on_hover: impl Fn(&bool, &mut Window, &mut App) + 'static) -> Self {
        self.on_hover = Some(Box::new(on_hover));
        self
    }

    pub fn on_click(
        mut self,
        on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(on_click));
        self
    }

    pub fn p(mut self, padding: impl Into<DefiniteLength>) -> Self {
        let padding = padding.into();
        self.style.padding = Edges::all(Some(padding));
        self
    }

    pub fn pt(mut self, padding: impl Into<DefiniteLength>) -> Self {
        self.style.padding.top = Some(padding.into());
        self
    }

    pub fn pb(mut self, padding: impl Into<DefiniteLength>) -> Self {
        self.style.padding.bottom = Some(padding.into());
        self
    }

    pub fn pl(mut self, padding: impl Into<DefiniteLength>) -> Self {
        self.style.padding.left = Some(padding.into());
        self
    }

    pub fn pr(mut self, padding: impl Into<DefiniteLength>) -> Self {
        self.style.padding.right = Some(padding.into());
        self
    }

    pub fn w(mut self, width: impl Into<Length>) -> Self {
        self.style.width = width.into();
        self
    }

    pub fn w_auto(mut self) -> Self {
        self.style.width = Length::Auto;
        self
    }

    pub fn w_full(mut self) -> Self {
        self.style.width = relative(1.).into();
        self
    }

    /// Overrides the label size picked by [`ButtonSize`].
    pub fn text_size(mut self, text_size: impl Into<Pixels>) -> Self {
        self.style.text_size = Some(text_size.into());
        self
    }
}

impl RenderOnce for Button {
    fn render(mut self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let is_disabled = self.is_disabled();
        let colors = self.variant.into_colors(cx);
        let metrics = self.size.metrics();
        let text_size = self.style.text_size.unwrap_or(metrics.font_size);
        let width = self.style.width;

        let vertical_padding = DefiniteLength::from(metrics.vertical_padding);
        let horizontal_padding = DefiniteLength::from(metrics.horizontal_padding);
        let padding_top = self.style.padding.top.unwrap_or(vertical_padding);
        let padding_right = self.style.padding.right.unwrap_or(horizontal_padding);
        let padding_bottom = self.style.padding.bottom.unwrap_or(vertical_padding);
        let padding_left = self.style.padding.left.unwrap_or(horizontal_padding);

        let press_state = self.press_state.take().unwrap_or_else(|| {
            window.use_keyed_state(
                self.id.with_suffix("state:press"),
                cx,
                |_window, _cx| PressState::Resting,
            )
        });

        // A press can't outlive the button becoming disabled.
        if is_disabled && press_state.update(cx, |state, _cx| state.press_end()) {
            log::trace!("button press dropped on disable");
        }

        let current_press = *press_state.read(cx);
        let scale_state = press_scale_transition(
            self.id.clone(),
            window,
            cx,
            current_press,
            &self.press_animation,
        );
        let disabled_transition_state =
            disabled_transition(self.id.clone(), window, cx, is_disabled);

        let id = self.id.clone();
        let label = self.label;
        let start_icon = self.start_icon;
        let is_loading = self.is_loading;
        let foreground = colors.foreground;

        div()
            .id(self.id.clone())
            .debug_selector(|| id.to_string())
            .cursor(if is_disabled {
                CursorStyle::OperationNotAllowed
            } else {
                CursorStyle::PointingHand
            })
            .h_auto()
            .flex()
            .flex_row()
            .justify_center()
            .items_center()
            .font_weight(FontWeight::SEMIBOLD)
            .child(
                squircle()
                    .absolute_expand()
                    .rounded(CORNER_RADIUS)
                    .when(!colors.background.is_transparent(), |this| {
                        this.bg(colors.background)
                    })
                    .when_some(colors.border, |this, border| {
                        this.border(px(1.)).border_inside().border_color(border)
                    }),
            )
            .with_transitions(
                (scale_state, disabled_transition_state),
                move |_cx, this, (scale, opacity)| {
                    let text_size = text_size * scale;

                    this.w(press::scale_length(width, scale))
                        .pt(press::scale_definite_length(padding_top, scale))
                        .pr(press::scale_definite_length(padding_right, scale))
                        .pb(press::scale_definite_length(padding_bottom, scale))
                        .pl(press::scale_definite_length(padding_left, scale))
                        .opacity(opacity)
                        .text_size(text_size)
                        .map(|this| {
                            if is_loading {
                                return this.child(
                                    div()
                                        .debug_selector(|| format!("{id}-loading"))
                                        .child(
                                            LoadingIndicator::new(id.with_suffix("loading"))
                                                .color(foreground)
                                                .size(text_size),
                                        ),
                                );
                            }

                            this.child(
                                div()
                                    .flex()
                                    .flex_row()
                                    .items_center()
                                    .gap(CONTENT_GAP)
                                    .when_some(start_icon.clone(), |this, icon| {
                                        this.child(
                                            Icon::new(icon).size(text_size).color(foreground),
                                        )
                                    })
                                    .child(
                                        div()
                                            .debug_selector(|| format!("{id}-label"))
                                            .text_color(foreground)
                                            .child(label.clone()),
                                    ),
                            )
                        })
                },
            )
            .when(!is_disabled, |this| {
                let press_state_on_mouse_down = press_state.clone();
                let press_state_on_mouse_up = press_state.clone();
                let press_state_on_mouse_up_out = press_state;

                let on_press_start = self.on_press_start;
                let on_press_end_on_mouse_up = self.on_press_end.clone();
                let on_press_end_on_mouse_up_out = self.on_press_end;
                let on_hover = self.on_hover;
                let on_click = self.on_click;

                this.on_mouse_down(MouseButton::Left, move |event, window, cx| {
                    // Prevents the press from moving focus.
                    window.prevent_default();

                    if press_state_on_mouse_down.update(cx, |state, _cx| state.press_start()) {
                        log::trace!("button press started");
                        cx.notify(press_state_on_mouse_down.entity_id());
                    }

                    if let Some(on_press_start) = on_press_start.as_ref() {
                        (on_press_start)(event, window, cx);
                    }
                })
                .on_mouse_up(MouseButton::Left, move |event, window, cx| {
                    Self::handle_press_end(
                        &press_state_on_mouse_up,
                        on_press_end_on_mouse_up.as_ref(),
                        event,
                        window,
                        cx,
                    );
                })
                .on_mouse_up_out(MouseButton::Left, move |event, window, cx| {
                    // The pointer pressed here, left the bounds, then released.
                    Self::handle_press_end(
                        &press_state_on_mouse_up_out,
                        on_press_end_on_mouse_up_out.as_ref(),
                        event,
                        window,
                        cx,
                    );
                })
                .on_hover(move |hover, window, cx| {
                    if let Some(on_hover) = on_hover.as_ref() {
                        (on_hover)(hover, window, cx);
                    }
                })
                .on_click(move |event, window, cx| {
                    if let Some(on_click) = on_click.as_ref() {
                        (on_click)(event, window, cx);
                    }
                })
            })
    }
}

impl Button {
    fn handle_press_end(
        press_state: &Entity<PressState>,
        on_press_end: Option<&PressEndHandler>,
        event: &MouseUpEvent,
        window: &mut Window,
        cx: &mut App,
    ) {
        if !press_state.update(cx, |state, _cx| state.press_end()) {
            return;
        }

        log::trace!("button press ended");
        cx.notify(press_state.entity_id());

        if let Some(on_press_end) = on_press_end {
            (on_press_end)(event, window, cx);
        }
    }
}
