//! Entprell-Automat (Debounce Engine)
//!
//! Wandelt verrauschte mechanische Flanken in genau ein logisches
//! Tastenereignis pro physischem Druck um, mit einem Ruhefenster von
//! 50 ms. Pure State Machine ohne eigene Uhr: der Aufrufer liefert die
//! Ereignisse (fallende Flanke, verzögerte Bestätigung) und setzt die
//! zurückgegebenen Seiteneffekte um.

/// Zustand eines Button-Kanals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DebounceState {
    /// Kein Entprell-Vorgang aktiv, Flanken-Interrupts freigegeben
    Idle,
    /// Bestätigung eingeplant, Flanken-Interrupts für diese Leitung maskiert
    PendingConfirm,
}

/// Antwort auf eine fallende Flanke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EdgeAction {
    /// Flanken-Interrupts der Leitung maskieren und eine Bestätigung
    /// nach Ablauf des Entprell-Fensters einplanen
    ArmConfirmation,
    /// Kanal entprellt bereits - Flanke verwerfen
    Ignore,
}

/// Ergebnis der verzögerten Bestätigung
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfirmOutcome {
    /// Leitung nach Ablauf des Fensters noch aktiv: echter Tastendruck
    Confirmed,
    /// Prellen hat sich zu "nicht gedrückt" aufgelöst oder der Druck war
    /// kürzer als das Fenster: still verwerfen (designtes Verhalten,
    /// kein Fehler)
    Rejected,
}

/// Entprell-Automat für genau einen Button-Kanal
///
/// Eine Instanz pro Kanal, erzeugt beim Start, Prozess-Lebensdauer.
/// Zugriff nur aus dem Interrupt-Kontext des Kanals und dessen
/// verzögertem Callback - die Maskierung der Flanken-Interrupts während
/// `PendingConfirm` ist zugleich der gegenseitige Ausschluss für diesen
/// Zustand.
#[derive(Debug)]
pub struct Debouncer {
    state: DebounceState,
}

impl Debouncer {
    pub const fn new() -> Self {
        Self {
            state: DebounceState::Idle,
        }
    }

    /// `true` solange eine Bestätigung aussteht
    pub const fn is_debouncing(&self) -> bool {
        matches!(self.state, DebounceState::PendingConfirm)
    }

    /// Fallende Flanke auf der Leitung des Kanals
    ///
    /// Guard: nur im `Idle`-Zustand wird eine Bestätigung bewaffnet.
    /// Dadurch ist nie mehr als eine Bestätigung pro Kanal ausstehend.
    pub fn on_falling_edge(&mut self) -> EdgeAction {
        match self.state {
            DebounceState::Idle => {
                self.state = DebounceState::PendingConfirm;
                EdgeAction::ArmConfirmation
            }
            DebounceState::PendingConfirm => EdgeAction::Ignore,
        }
    }

    /// Verzögerte Bestätigung nach Ablauf des Entprell-Fensters
    ///
    /// `line_asserted` ist das Ergebnis der Neuabtastung der Leitung
    /// (aktiv-low: Pegel 0 heißt gedrückt). Der Übergang zurück nach
    /// `Idle` passiert bedingungslos - Interrupts freigeben und Flag
    /// zurücksetzen hängen NICHT vom Abtastergebnis ab.
    pub fn on_confirmation(&mut self, line_asserted: bool) -> ConfirmOutcome {
        self.state = DebounceState::Idle;
        if line_asserted {
            ConfirmOutcome::Confirmed
        } else {
            ConfirmOutcome::Rejected
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_in_idle_arms_confirmation() {
        let mut d = Debouncer::new();
        assert!(!d.is_debouncing());

        assert_eq!(d.on_falling_edge(), EdgeAction::ArmConfirmation);
        assert!(d.is_debouncing());
    }

    #[test]
    fn test_repeated_edges_while_pending_are_ignored() {
        let mut d = Debouncer::new();
        assert_eq!(d.on_falling_edge(), EdgeAction::ArmConfirmation);

        // Prellen erzeugt weitere Flanken: keine zweite Bestätigung
        for _ in 0..5 {
            assert_eq!(d.on_falling_edge(), EdgeAction::Ignore);
        }
        assert!(d.is_debouncing());
    }

    #[test]
    fn test_held_press_is_confirmed() {
        let mut d = Debouncer::new();
        d.on_falling_edge();

        // Leitung nach 50 ms noch aktiv: echter Druck
        assert_eq!(d.on_confirmation(true), ConfirmOutcome::Confirmed);
        assert!(!d.is_debouncing());
    }

    #[test]
    fn test_short_bounce_is_rejected() {
        let mut d = Debouncer::new();
        d.on_falling_edge();

        // Leitung vor Ablauf des Fensters wieder losgelassen
        assert_eq!(d.on_confirmation(false), ConfirmOutcome::Rejected);
        // Auch bei Rejection: zurück nach Idle, Interrupts wieder frei
        assert!(!d.is_debouncing());
    }

    #[test]
    fn test_rearms_after_confirmation() {
        let mut d = Debouncer::new();

        d.on_falling_edge();
        d.on_confirmation(true);

        // Nächster Druck startet einen frischen Entprell-Vorgang
        assert_eq!(d.on_falling_edge(), EdgeAction::ArmConfirmation);
    }
}
