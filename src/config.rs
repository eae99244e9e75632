//! Fixed page settings shared by the state modules and the components.

/// Relative path the content document is fetched from.
pub const PROFILE_PATH: &str = "./data/profile.json";

/// Portrait shown in the tilt widget.
pub const PROFILE_PHOTO_URL: &str = "https://images.unsplash.com/photo-1633332755192-727a05c4013d?q=80&w=1000&auto=format&fit=crop";

/// Local storage key holding the last selected locale code.
pub const LOCALE_STORAGE_KEY: &str = "nk_lang";

/// Height reserved for the fixed navbar when scrolling to a section.
pub const HEADER_ALLOWANCE: f64 = 100.0;

/// Vertical scroll position past which the header switches to its compact style.
pub const SCROLLED_THRESHOLD: f64 = 50.0;

/// Fraction of an element that must be in view before it fades in.
pub const REVEAL_THRESHOLD: f64 = 0.15;

/// Category shown in the stack panel before the visitor picks one.
pub const DEFAULT_CATEGORY: &str = "Android";

/// Description used for stack entries that carry only a name.
pub const DEFAULT_STACK_DESCRIPTION: &str = "Core implementation and delivery.";

/// Separator between the name and description of a stack entry.
pub const STACK_SEPARATOR: char = '—';

/// Marker splitting the hero headline into lines.
pub const HERO_LINE_BREAK: &str = "<br/>";

/// Maximum rotation of the tilt photo, in degrees, at the edge of the box.
pub const TILT_DEGREES: f64 = 20.0;

/// Scale applied to the tilt photo while hovered.
pub const TILT_SCALE: f64 = 1.05;
