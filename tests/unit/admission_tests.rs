use gate_rs::{Gate, GateError, LineKind, PersonId};

#[cfg(test)]
mod tests {
    use super::*;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .try_init();
    }

    // --- Pattern adherence ---

    #[test]
    fn test_regular_only_served_in_arrival_order() {
        init_tracing();
        let mut gate = Gate::new();
        let people: Vec<PersonId> = (0..12).map(|_| PersonId::new()).collect();
        for person in &people {
            gate.arrive("regular", *person).unwrap();
        }

        let mut lines = Vec::new();
        let mut served = Vec::new();
        while let Some(line) = gate.peek_next_line() {
            lines.push(line);
            served.push(gate.serve().unwrap());
        }

        assert_eq!(served, people);
        assert!(lines.iter().all(|line| *line == LineKind::Regular));
        // Twelve regulars take four full cycles, ending back on slot 0.
        assert_eq!(gate.cursor(), 0);
    }

    // --- Skip and advance ---

    #[test]
    fn test_five_regulars() {
        init_tracing();
        let mut gate = Gate::new();
        for id in ["A", "B", "C", "D", "E"] {
            gate.arrive("regular", id).unwrap();
        }

        let first_four: Vec<_> = (0..4).map(|_| gate.serve().unwrap()).collect();
        assert_eq!(first_four, ["A", "B", "C", "D"]);
        assert_eq!(gate.serve().unwrap(), "E");
    }

    // --- Interleaving ---

    #[test]
    fn test_fastpass_then_regulars() {
        init_tracing();
        let mut gate = Gate::new();
        gate.arrive("fastpass", "F1").unwrap();
        for id in ["R1", "R2", "R3", "R4"] {
            gate.arrive("regular", id).unwrap();
        }

        let served: Vec<_> = std::iter::from_fn(|| gate.serve().ok()).collect();
        assert_eq!(served, ["F1", "R1", "R2", "R3", "R4"]);
    }

    // --- Peek and serve agreement ---

    #[test]
    fn test_peek_serve_drain_exactly_once() {
        init_tracing();
        let mut gate = Gate::new();
        let mut arrived = Vec::new();
        for i in 0..30 {
            let person = PersonId::new();
            let line = if i % 5 < 2 { "fastpass" } else { "regular" };
            gate.arrive(line, person).unwrap();
            arrived.push(person);
        }

        let mut served = Vec::new();
        while let Some(line) = gate.peek_next_line() {
            let (served_line, person) = gate.serve_with_line().unwrap();
            assert_eq!(served_line, line);
            served.push(person);
        }

        assert_eq!(served.len(), arrived.len());
        served.sort();
        arrived.sort();
        assert_eq!(served, arrived);
    }

    // --- Empty state ---

    #[test]
    fn test_fresh_gate() {
        let mut gate: Gate<PersonId> = Gate::default();
        assert_eq!(gate.serve(), Err(GateError::EmptyQueues));
        assert_eq!(gate.peek_next_line(), None);
    }

    // --- Invalid label ---

    #[test]
    fn test_unknown_line() {
        let mut gate = Gate::new();
        assert_eq!(
            gate.arrive("vip", PersonId::new()),
            Err(GateError::InvalidLineKind("vip".to_string()))
        );
        assert_eq!(gate.serve(), Err(GateError::EmptyQueues));
    }
}
