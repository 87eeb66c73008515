/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Tests for lookahead and its agreement with serve.

#[cfg(test)]
mod tests {
    use crate::sequencer::{Gate, LineKind};
    use std::collections::HashSet;

    /// Small deterministic generator so the mixes are reproducible.
    fn lcg(state: &mut u64) -> u64 {
        *state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        *state >> 33
    }

    #[test]
    fn test_peek_on_fresh_gate_is_none() {
        let gate: Gate<u32> = Gate::new();
        assert_eq!(gate.peek_next_line(), None);
        assert_eq!(gate.peek_next(), None);
    }

    #[test]
    fn test_peek_does_not_mutate() {
        let mut gate = Gate::new();
        gate.arrive("regular", 1u32).unwrap();
        gate.arrive("fastpass", 2u32).unwrap();
        let before = gate.snapshot();

        for _ in 0..10 {
            assert_eq!(gate.peek_next_line(), Some(LineKind::Fastpass));
            assert_eq!(gate.peek_next(), Some((LineKind::Fastpass, &2)));
        }

        assert_eq!(gate.snapshot(), before);
    }

    #[test]
    fn test_peek_skips_empty_slot() {
        let mut gate = Gate::new();
        gate.arrive("regular", "R1").unwrap();
        assert_eq!(gate.peek_next_line(), Some(LineKind::Regular));
        assert_eq!(gate.cursor(), 0);
    }

    #[test]
    fn test_peek_wraps_to_fastpass() {
        let mut gate = Gate::new();
        gate.arrive("fastpass", "F1").unwrap();
        gate.arrive("fastpass", "F2").unwrap();
        assert_eq!(gate.serve().unwrap(), "F1");

        // Cursor sits on regular slots; only fastpass has people.
        assert_eq!(gate.cursor(), 1);
        assert_eq!(gate.peek_next_line(), Some(LineKind::Fastpass));
        assert_eq!(gate.serve().unwrap(), "F2");
    }

    #[test]
    fn test_peek_then_serve_agree_until_drained() {
        let mut gate = Gate::new();
        let mut state = 7u64;
        let mut arrived = HashSet::new();

        for id in 0..200u64 {
            let line = if lcg(&mut state) % 4 == 0 {
                LineKind::Fastpass
            } else {
                LineKind::Regular
            };
            gate.arrive_in(line, id);
            arrived.insert(id);
        }

        let mut served = HashSet::new();
        let mut rounds = 0;
        while let Some(predicted) = gate.peek_next_line() {
            let (line, id) = gate.serve_with_line().unwrap();
            assert_eq!(line, predicted);
            assert!(served.insert(id), "token {id} served twice");
            rounds += 1;
            assert!(rounds <= 200, "drain did not terminate");
        }

        assert_eq!(served, arrived);
        assert!(gate.serve().is_err());
    }

    #[test]
    fn test_peek_agrees_with_interleaved_arrivals() {
        let mut gate = Gate::new();
        let mut state = 42u64;
        let mut next_id = 0u64;

        for _ in 0..500 {
            match lcg(&mut state) % 3 {
                0 => {
                    gate.arrive_in(LineKind::Fastpass, next_id);
                    next_id += 1;
                }
                1 => {
                    gate.arrive_in(LineKind::Regular, next_id);
                    next_id += 1;
                }
                _ => {
                    let predicted = gate.peek_next();
                    let predicted = predicted.map(|(line, id)| (line, *id));
                    match gate.serve_with_line() {
                        Ok(served) => assert_eq!(Some(served), predicted),
                        Err(_) => assert_eq!(predicted, None),
                    }
                }
            }
        }
    }
}
