//! Navigation route table.
//!
//! The booking screen is one entry in a stack of five screens. The siblings
//! (entry, registration, exit, success) live in the UI shell; their only
//! contract with this crate is a route name the navigation host mounts them
//! under.

use serde::Serialize;

/// The screens the navigation host knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    /// Session booking — the screen this crate implements.
    Booking,
    /// Entry / login.
    Entry,
    /// Account registration.
    Registration,
    /// Exit / logout.
    Exit,
    /// Booking success confirmation.
    Success,
}

impl Screen {
    /// Route name the navigation host mounts this screen under.
    pub const fn route_name(self) -> &'static str {
        match self {
            Self::Booking => "agendar",
            Self::Entry => "entrada",
            Self::Registration => "cadastro",
            Self::Exit => "saida",
            Self::Success => "sucesso",
        }
    }
}

/// Route table in declaration order; the first entry is the initial route.
pub const ROUTES: &[Screen] = &[
    Screen::Booking,
    Screen::Entry,
    Screen::Registration,
    Screen::Exit,
    Screen::Success,
];

/// Screen registered under `name`, if any.
pub fn by_route_name(name: &str) -> Option<Screen> {
    ROUTES.iter().copied().find(|s| s.route_name() == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_is_initial_route() {
        assert_eq!(ROUTES[0], Screen::Booking);
        assert_eq!(ROUTES[0].route_name(), "agendar");
    }

    #[test]
    fn all_routes_resolve_by_name() {
        for screen in ROUTES {
            assert_eq!(by_route_name(screen.route_name()), Some(*screen));
        }
    }

    #[test]
    fn unknown_route_resolves_to_none() {
        assert_eq!(by_route_name("perfil"), None);
        assert_eq!(by_route_name(""), None);
    }

    #[test]
    fn route_names_are_unique() {
        for (i, a) in ROUTES.iter().enumerate() {
            for b in &ROUTES[i + 1..] {
                assert_ne!(a.route_name(), b.route_name());
            }
        }
    }
}
