use std::time::Duration;

use gpui::{App, ElementId, Window};
use gpui_transitions::Transition;

use crate::{ElementIdExt, components::PressAnimation, components::PressState};

/// Creates (or reuses) a keyed transition and retargets it to the value
/// picked by the branches. Eases with `ease_out_quint` unless an
/// `easing: ...` argument follows the duration.
#[macro_export]
macro_rules! conditional_transition {
    (
        $id:expr, $window:expr, $cx:expr, $duration:expr, easing: $easing:expr, $($rest:tt)+
    ) => {{
        use gpui_transitions::WindowUseTransition;

        let value = $crate::conditional_transition_branches!(@condition [ $($rest)+ ]);

        let transition = $window.use_keyed_transition(
            $id,
            $cx,
            $duration,
            |_window, _cx| value,
        )
        .with_easing($easing);

        let value = value.into();

        if transition.read_goal($cx) != &value {
            transition.update($cx, |this, _cx| *this = value);
            $cx.notify(transition.entity_id());
        }

        transition
    }};

    (
        $id:expr, $window:expr, $cx:expr, $duration:expr, $($rest:tt)+
    ) => {
        $crate::conditional_transition!(
            $id, $window, $cx, $duration, easing: gpui::ease_out_quint(), $($rest)+
        )
    };
}

#[macro_export]
macro_rules! conditional_transition_branches {
    // Default branch wasn't last.
    (@branch_list [ _ => $value:expr, $($rest:tt)+ ]) => {{
        compile_error!("`_ => value` is only allowed on the last branch.");
    }};

    // Entry point.
    (@condition [ { $cond:expr => $value:expr, $($rest:tt)+ } ]) => {{
        if $cond { $value } else { $crate::conditional_transition_branches!(@branch_list [ $($rest)+ ])  }
    }};

    (@branch_list [ $cond:expr => $value:expr, $($rest:tt)+ ]) => {{
        if $cond { $value } else { $crate::conditional_transition_branches!(@branch_list [ $($rest)+ ])  }
    }};

    // Last branch.
    (@branch_list [ _ => $value:expr ]) => {{
        $value
    }};

    // Last branch wasn't default.
    (@branch_list [ $cond:expr => $value:expr ]) => {{
        compile_error!("The last branch must be `_ => value`");
    }};

    // Plain value.
    (@condition [ $($rest:tt)+ ]) => {{
        $($rest)+
    }};
}

/// Fades a component out while it is disabled.
pub fn disabled_transition(
    base_id: impl Into<ElementId>,
    window: &mut Window,
    cx: &mut App,
    is_disabled: bool,
) -> Transition<f32> {
    conditional_transition!(
        base_id.into().with_suffix("state:transition:disabled"),
        window,
        cx,
        Duration::from_millis(365),
        {
            is_disabled => 0.45,
            _ => 1.
        }
    )
}

/// Springs a component's scale towards the scale of `press`.
///
/// The goal is retargeted immediately; progress is evaluated when the
/// element paints, so press handlers never wait on it.
pub fn press_scale_transition(
    base_id: impl Into<ElementId>,
    window: &mut Window,
    cx: &mut App,
    press: PressState,
    animation: &PressAnimation,
) -> Transition<f32> {
    conditional_transition!(
        base_id.into().with_suffix("state:transition:scale"),
        window,
        cx,
        animation.duration,
        easing: animation.easing(),
        press.scale()
    )
}
