#![forbid(unsafe_code)]

//! Raw pointer and touch input, normalized into gesture signals.
//!
//! Mouse and touch events collapse into two abstract signals:
//!
//! | Raw event      | Signal                 |
//! |----------------|------------------------|
//! | `mousedown`    | `Start`                |
//! | `touchstart`   | `Start` (suppress default) |
//! | `mouseup`      | `Stop(Lift)`           |
//! | `touchend`     | `Stop(Lift)`           |
//! | `mouseleave`   | `Stop(Leave)`          |
//! | `touchcancel`  | `Stop(Leave)`          |
//!
//! `touchstart` must suppress the browser's synthetic follow-up mouse event,
//! otherwise one tap would be seen as two presses.

/// Why a gesture stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StopCause {
    /// Pointer released over the button (`mouseup` / `touchend`).
    Lift,
    /// Pointer left or the touch was cancelled (`mouseleave` / `touchcancel`).
    Leave,
}

impl StopCause {
    /// Whether this stop came from leaving the button.
    #[inline]
    #[must_use]
    pub const fn is_leave(self) -> bool {
        matches!(self, Self::Leave)
    }
}

/// Abstract gesture signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureSignal {
    Start,
    Stop(StopCause),
}

/// Raw input events the button listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerInput {
    MouseDown,
    MouseUp,
    MouseLeave,
    TouchStart,
    TouchEnd,
    TouchCancel,
}

impl PointerInput {
    /// All inputs, in listener registration order.
    pub const ALL: [Self; 6] = [
        Self::MouseDown,
        Self::MouseUp,
        Self::MouseLeave,
        Self::TouchStart,
        Self::TouchEnd,
        Self::TouchCancel,
    ];

    /// Gesture signal for this input.
    #[must_use]
    pub const fn signal(self) -> GestureSignal {
        match self {
            Self::MouseDown | Self::TouchStart => GestureSignal::Start,
            Self::MouseUp | Self::TouchEnd => GestureSignal::Stop(StopCause::Lift),
            Self::MouseLeave | Self::TouchCancel => GestureSignal::Stop(StopCause::Leave),
        }
    }

    /// Whether the host must cancel the event's default action.
    #[must_use]
    pub const fn suppresses_default(self) -> bool {
        matches!(self, Self::TouchStart)
    }

    /// DOM event type name.
    #[must_use]
    pub const fn dom_name(self) -> &'static str {
        match self {
            Self::MouseDown => "mousedown",
            Self::MouseUp => "mouseup",
            Self::MouseLeave => "mouseleave",
            Self::TouchStart => "touchstart",
            Self::TouchEnd => "touchend",
            Self::TouchCancel => "touchcancel",
        }
    }

    /// Input for a DOM event type name, if the button listens to it.
    #[must_use]
    pub fn from_dom_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|input| input.dom_name() == name)
    }
}
