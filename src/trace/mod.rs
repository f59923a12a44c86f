//! Step generation for selection sort.
//!
//! [`generate`] runs selection sort on a private copy of its input and records
//! a [`Step`] for every event worth showing: seeding the minimum, each
//! comparison, each minimum update, the swap (or the decision not to swap),
//! the end of every pass, and the start and end of the whole run.
//!
//! Every step carries a full copy of the array rather than a diff, so any step
//! can be rendered on its own and the cursor can move freely in both
//! directions.

pub mod narrative;

use crate::listing::CodeLine;
use rustc_hash::FxHashMap;
use serde::Serialize;
use tracing::debug;

pub use narrative::Locale;

/// What kind of instant a step represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    Init,
    Comparing,
    FoundNewMin,
    Swapping,
    PassComplete,
    Complete,
}

impl Phase {
    pub const ALL: [Phase; 6] = [
        Phase::Init,
        Phase::Comparing,
        Phase::FoundNewMin,
        Phase::Swapping,
        Phase::PassComplete,
        Phase::Complete,
    ];
}

/// The event a step records, with the values needed to describe it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Event {
    Start,
    /// The first element of the unsorted part becomes the tentative minimum
    SeedMin { index: usize, value: i64 },
    Compare {
        index: usize,
        value: i64,
        min_index: usize,
        min_value: i64,
    },
    NewMin { index: usize, value: i64 },
    /// `value` now sits at `index`; the displaced element moved to `from`
    Swap { index: usize, from: usize, value: i64 },
    NoSwap { index: usize },
    /// `settled` elements at the front are in their final place
    PassComplete { settled: usize },
    Finished,
}

/// One renderable instant of the run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub array: Vec<i64>,
    pub focused: Vec<usize>,
    pub tentative_min: Option<usize>,
    pub phase: Phase,
    pub event: Event,
    pub highlight: Option<CodeLine>,
}

impl Step {
    pub fn is_focused(&self, index: usize) -> bool {
        self.focused.contains(&index)
    }

    /// Human-readable description of this step
    pub fn narrative(&self, locale: Locale) -> String {
        narrative::describe(&self.event, locale)
    }
}

/// The complete, immutable list of steps for one input array.
///
/// A trace always holds at least two steps: the leading [`Phase::Init`] and
/// the trailing [`Phase::Complete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepTrace {
    input: Vec<i64>,
    steps: Vec<Step>,
}

impl StepTrace {
    /// Get a step by index
    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn first(&self) -> &Step {
        &self.steps[0]
    }

    pub fn last(&self) -> &Step {
        &self.steps[self.steps.len() - 1]
    }

    /// Get the number of steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// A generated trace is never empty
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// The array the trace was generated from
    pub fn input(&self) -> &[i64] {
        &self.input
    }

    /// The array as it stands after the final step
    pub fn sorted(&self) -> &[i64] {
        &self.last().array
    }

    /// How many steps of each phase the trace contains
    pub fn phase_counts(&self) -> FxHashMap<Phase, usize> {
        let mut counts = FxHashMap::default();
        for step in &self.steps {
            *counts.entry(step.phase).or_insert(0) += 1;
        }
        counts
    }

    pub fn swap_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| s.phase == Phase::Swapping)
            .count()
    }
}

impl<'a> IntoIterator for &'a StepTrace {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Working state while the trace is recorded
struct Recorder {
    array: Vec<i64>,
    steps: Vec<Step>,
}

impl Recorder {
    fn emit(
        &mut self,
        phase: Phase,
        focused: Vec<usize>,
        tentative_min: Option<usize>,
        event: Event,
        highlight: CodeLine,
    ) {
        self.steps.push(Step {
            array: self.array.clone(),
            focused,
            tentative_min,
            phase,
            event,
            highlight: Some(highlight),
        });
    }
}

/// Record the full selection sort run over `input`.
///
/// The minimum is replaced only on a strictly smaller value, so on ties the
/// leftmost candidate stays selected. A [`Event::NewMin`] step is emitted
/// only when the minimum actually changes.
pub fn generate(input: &[i64]) -> StepTrace {
    let n = input.len();
    let mut rec = Recorder {
        array: input.to_vec(),
        steps: Vec::with_capacity(2 + 3 * n + n * n.saturating_sub(1)),
    };

    rec.emit(Phase::Init, Vec::new(), None, Event::Start, CodeLine::Signature);

    for i in 0..n {
        let mut min = i;
        let value = rec.array[i];
        rec.emit(
            Phase::FoundNewMin,
            vec![i],
            Some(i),
            Event::SeedMin { index: i, value },
            CodeLine::SeedMin,
        );

        for j in (i + 1)..n {
            let event = Event::Compare {
                index: j,
                value: rec.array[j],
                min_index: min,
                min_value: rec.array[min],
            };
            rec.emit(Phase::Comparing, vec![j], Some(min), event, CodeLine::Compare);

            if rec.array[j] < rec.array[min] {
                min = j;
                let value = rec.array[j];
                rec.emit(
                    Phase::FoundNewMin,
                    vec![j],
                    Some(min),
                    Event::NewMin { index: j, value },
                    CodeLine::UpdateMin,
                );
            }
        }

        if min != i {
            rec.array.swap(i, min);
            let event = Event::Swap {
                index: i,
                from: min,
                value: rec.array[i],
            };
            rec.emit(Phase::Swapping, vec![i, min], None, event, CodeLine::Swap);
        } else {
            rec.emit(
                Phase::Comparing,
                vec![i],
                Some(i),
                Event::NoSwap { index: i },
                CodeLine::Swap,
            );
        }

        rec.emit(
            Phase::PassComplete,
            (0..=i).collect(),
            None,
            Event::PassComplete { settled: i + 1 },
            CodeLine::OuterLoop,
        );
    }

    rec.emit(
        Phase::Complete,
        (0..n).collect(),
        None,
        Event::Finished,
        CodeLine::Signature,
    );

    debug!(len = n, steps = rec.steps.len(), "generated selection sort trace");

    StepTrace {
        input: input.to_vec(),
        steps: rec.steps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phases(trace: &StepTrace) -> Vec<Phase> {
        trace.iter().map(|s| s.phase).collect()
    }

    #[test]
    fn test_empty_input() {
        let trace = generate(&[]);
        assert_eq!(phases(&trace), vec![Phase::Init, Phase::Complete]);
        assert!(trace.last().focused.is_empty());
    }

    #[test]
    fn test_single_element() {
        let trace = generate(&[7]);
        assert_eq!(
            phases(&trace),
            vec![
                Phase::Init,
                Phase::FoundNewMin,
                Phase::Comparing,
                Phase::PassComplete,
                Phase::Complete,
            ]
        );
        assert_eq!(trace.get(2).unwrap().event, Event::NoSwap { index: 0 });
    }

    #[test]
    fn test_two_elements_swap() {
        let trace = generate(&[2, 1]);
        let events: Vec<&Event> = trace.iter().map(|s| &s.event).collect();
        assert_eq!(
            events,
            vec![
                &Event::Start,
                &Event::SeedMin { index: 0, value: 2 },
                &Event::Compare {
                    index: 1,
                    value: 1,
                    min_index: 0,
                    min_value: 2
                },
                &Event::NewMin { index: 1, value: 1 },
                &Event::Swap {
                    index: 0,
                    from: 1,
                    value: 1
                },
                &Event::PassComplete { settled: 1 },
                &Event::SeedMin { index: 1, value: 2 },
                &Event::NoSwap { index: 1 },
                &Event::PassComplete { settled: 2 },
                &Event::Finished,
            ]
        );
        assert_eq!(trace.sorted(), &[1, 2]);
    }

    #[test]
    fn test_swap_step_snapshot_is_after_swap() {
        let trace = generate(&[3, 1, 2]);
        let swap = trace.iter().find(|s| s.phase == Phase::Swapping).unwrap();
        assert_eq!(swap.array, vec![1, 3, 2]);
        assert_eq!(swap.focused, vec![0, 1]);
        assert_eq!(swap.tentative_min, None);
    }

    #[test]
    fn test_highlight_lines() {
        let trace = generate(&[2, 1]);
        let lines: Vec<usize> = trace
            .iter()
            .map(|s| s.highlight.unwrap().index())
            .collect();
        assert_eq!(lines, vec![0, 3, 5, 6, 7, 2, 3, 7, 2, 0]);
    }

    #[test]
    fn test_step_count_formula() {
        // 2 + 3n + n(n-1)/2 + updates
        let trace = generate(&[5, 3, 8, 1, 2]);
        let updates = trace
            .iter()
            .filter(|s| matches!(s.event, Event::NewMin { .. }))
            .count();
        assert_eq!(trace.len(), 2 + 15 + 10 + updates);
    }

    #[test]
    fn test_phase_counts() {
        let trace = generate(&[4, 3, 2, 1]);
        let counts = trace.phase_counts();
        assert_eq!(counts[&Phase::Init], 1);
        assert_eq!(counts[&Phase::Complete], 1);
        assert_eq!(counts[&Phase::PassComplete], 4);
        assert_eq!(counts.get(&Phase::Swapping).copied(), Some(trace.swap_count()));
    }

    #[test]
    fn test_input_is_not_mutated() {
        let input = vec![3, 2, 1];
        let trace = generate(&input);
        assert_eq!(input, vec![3, 2, 1]);
        assert_eq!(trace.input(), &[3, 2, 1]);
        assert_eq!(trace.first().array, vec![3, 2, 1]);
    }

    #[test]
    fn test_serialize_step() {
        let trace = generate(&[2, 1]);
        let json = serde_json::to_value(trace.get(3).unwrap()).unwrap();
        assert_eq!(json["phase"], "foundNewMin");
        assert_eq!(json["tentativeMin"], 1);
        assert_eq!(json["event"]["kind"], "newMin");
        assert_eq!(json["highlight"], 6);
    }
}
