//! Sensor access as an explicit capability.
//!
//! Some browsers only deliver orientation events after a user-triggered
//! permission prompt. The gate starts unauthorised, moves to authorised or
//! denied once, and stays there for the rest of the session.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SensorGate {
    #[default]
    Unauthorized,
    Authorized,
    Denied,
}

/// Answer from the platform permission prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PermissionOutcome {
    Granted,
    Denied,
    /// The prompt was dismissed or the answer is not recognised.
    Undecided,
}

impl PermissionOutcome {
    pub fn from_state(state: &str) -> Self {
        match state {
            "granted" => Self::Granted,
            "denied" => Self::Denied,
            _ => Self::Undecided,
        }
    }
}

/// What the caller must do after feeding an outcome to the gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateTransition {
    /// Just authorised: subscribe to the sample stream now.
    Subscribe,
    /// Just denied: report once, then stay quiet.
    Refused,
    /// Nothing changed.
    Unchanged,
}

impl SensorGate {
    pub fn admits_samples(&self) -> bool {
        matches!(self, Self::Authorized)
    }

    pub fn is_settled(&self) -> bool {
        !matches!(self, Self::Unauthorized)
    }

    /// Apply a prompt outcome. Anything other than an explicit grant denies,
    /// and a settled gate ignores further outcomes.
    pub fn resolve(&mut self, outcome: PermissionOutcome) -> GateTransition {
        if self.is_settled() {
            return GateTransition::Unchanged;
        }
        match outcome {
            PermissionOutcome::Granted => {
                *self = Self::Authorized;
                GateTransition::Subscribe
            }
            PermissionOutcome::Denied | PermissionOutcome::Undecided => {
                *self = Self::Denied;
                GateTransition::Refused
            }
        }
    }

    /// Platforms without a prompt authorise directly.
    pub fn authorize_without_prompt(&mut self) -> GateTransition {
        self.resolve(PermissionOutcome::Granted)
    }

    /// The prompt itself failed (unsupported or threw).
    pub fn fail(&mut self) -> GateTransition {
        self.resolve(PermissionOutcome::Denied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let gate = SensorGate::default();
        assert!(!gate.admits_samples());
        assert!(!gate.is_settled());
    }

    #[test]
    fn grant_subscribes_exactly_once() {
        let mut gate = SensorGate::default();
        assert_eq!(gate.resolve(PermissionOutcome::Granted), GateTransition::Subscribe);
        assert!(gate.admits_samples());
        assert_eq!(gate.authorize_without_prompt(), GateTransition::Unchanged);
        assert_eq!(gate.resolve(PermissionOutcome::Denied), GateTransition::Unchanged);
        assert!(gate.admits_samples());
    }

    #[test]
    fn denial_is_terminal() {
        let mut gate = SensorGate::default();
        assert_eq!(
            gate.resolve(PermissionOutcome::from_state("prompt")),
            GateTransition::Refused
        );
        assert_eq!(gate, SensorGate::Denied);
        assert_eq!(gate.resolve(PermissionOutcome::Granted), GateTransition::Unchanged);
        assert!(!gate.admits_samples());
    }

    #[test]
    fn failure_denies() {
        let mut gate = SensorGate::default();
        assert_eq!(gate.fail(), GateTransition::Refused);
        assert_eq!(gate, SensorGate::Denied);
    }

    #[test]
    fn refusal_is_reported_once() {
        let mut gate = SensorGate::default();
        let transitions = [
            gate.resolve(PermissionOutcome::Undecided),
            gate.fail(),
            gate.resolve(PermissionOutcome::Denied),
            gate.authorize_without_prompt(),
        ];
        let refusals = transitions
            .iter()
            .filter(|t| **t == GateTransition::Refused)
            .count();
        assert_eq!(refusals, 1);
        assert_eq!(transitions[0], GateTransition::Refused);
    }

    #[test]
    fn parses_permission_states() {
        assert_eq!(PermissionOutcome::from_state("granted"), PermissionOutcome::Granted);
        assert_eq!(PermissionOutcome::from_state("denied"), PermissionOutcome::Denied);
        assert_eq!(PermissionOutcome::from_state(""), PermissionOutcome::Undecided);
    }
}
