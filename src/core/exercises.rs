//! Exercises bound to their configured inputs, ready for [`DrillEngine`].
//!
//! [`DrillEngine`]: crate::core::engine::DrillEngine

use crate::config::toml_config::{
    AdderConfig, CounterConfig, DrillConfig, FibonacciConfig, FilterConfig, FrequencyConfig,
    MapConfig, ReduceConfig, RemoverConfig,
};
use crate::core::closures::{create_adder, create_counter, create_remover};
use crate::core::fibonacci::Fibonacci;
use crate::core::frequency::tally_letters;
use crate::core::sequence_ops::{
    array_sum, keep_lower_than, keep_lower_than_ten_filter, keep_lower_than_ten_loop, negate_all,
    sum_with_initial,
};
use crate::domain::model::ExerciseReport;
use crate::domain::ports::Exercise;
use crate::utils::error::{DrillError, Result};
use serde_json::{json, Value};

pub const EXERCISE_NAMES: [&str; 8] = [
    "adder",
    "counter",
    "remover",
    "fibonacci",
    "filter",
    "map",
    "reduce",
    "most_common",
];

/// Most calls a single counter run may make.
pub const MAX_COUNTER_CALLS: usize = 10_000;

fn report(exercise: &dyn Exercise, output: Value) -> ExerciseReport {
    ExerciseReport {
        name: exercise.name().to_string(),
        description: exercise.description().to_string(),
        input: exercise.input(),
        output,
    }
}

pub struct AdderExercise {
    config: AdderConfig,
}

impl Exercise for AdderExercise {
    fn name(&self) -> &'static str {
        "adder"
    }

    fn description(&self) -> &'static str {
        "Closure factory: add a captured base to each input"
    }

    fn input(&self) -> Value {
        json!({ "base": self.config.base, "inputs": self.config.inputs })
    }

    fn run(&self) -> Result<ExerciseReport> {
        let add = create_adder(self.config.base);
        let sums: Vec<i64> = self.config.inputs.iter().map(|&y| add(y)).collect();
        Ok(report(self, json!(sums)))
    }
}

pub struct CounterExercise {
    config: CounterConfig,
}

impl Exercise for CounterExercise {
    fn name(&self) -> &'static str {
        "counter"
    }

    fn description(&self) -> &'static str {
        "Stateful closure: a counter that remembers how often it was called"
    }

    fn input(&self) -> Value {
        json!({ "calls": self.config.calls })
    }

    fn run(&self) -> Result<ExerciseReport> {
        if self.config.calls > MAX_COUNTER_CALLS {
            return Err(DrillError::InvalidInput {
                message: format!(
                    "counter calls {} exceed the limit of {}",
                    self.config.calls, MAX_COUNTER_CALLS
                ),
            });
        }
        let mut counter = create_counter();
        let counts: Vec<u64> = (0..self.config.calls).map(|_| counter()).collect();
        Ok(report(self, json!(counts)))
    }
}

pub struct RemoverExercise {
    config: RemoverConfig,
}

impl Exercise for RemoverExercise {
    fn name(&self) -> &'static str {
        "remover"
    }

    fn description(&self) -> &'static str {
        "Closure factory: remove the element at a captured index"
    }

    fn input(&self) -> Value {
        json!(self.config.cases)
    }

    fn run(&self) -> Result<ExerciseReport> {
        let results = self
            .config
            .cases
            .iter()
            .map(|case| create_remover(case.index)(case.values.clone()))
            .collect::<Result<Vec<_>>>()?;
        Ok(report(self, json!(results)))
    }
}

pub struct FibonacciExercise {
    config: FibonacciConfig,
}

impl Exercise for FibonacciExercise {
    fn name(&self) -> &'static str {
        "fibonacci"
    }

    fn description(&self) -> &'static str {
        "Generator: lazily produce the next Fibonacci number on each call"
    }

    fn input(&self) -> Value {
        json!({ "count": self.config.count })
    }

    fn run(&self) -> Result<ExerciseReport> {
        let values: Vec<u64> = Fibonacci::new().take(self.config.count).collect();
        if values.len() < self.config.count {
            return Err(DrillError::Overflow {
                operation: format!("generating {} Fibonacci numbers", self.config.count),
            });
        }
        Ok(report(self, json!(values)))
    }
}

pub struct FilterExercise {
    config: FilterConfig,
}

impl Exercise for FilterExercise {
    fn name(&self) -> &'static str {
        "filter"
    }

    fn description(&self) -> &'static str {
        "Filter: keep values below a threshold, as a loop, a named predicate and a closure"
    }

    fn input(&self) -> Value {
        json!({ "values": self.config.values, "threshold": self.config.threshold })
    }

    fn run(&self) -> Result<ExerciseReport> {
        let values = &self.config.values;
        Ok(report(
            self,
            json!({
                "loop": keep_lower_than_ten_loop(values),
                "named_predicate": keep_lower_than_ten_filter(values),
                "closure": keep_lower_than(values, self.config.threshold),
            }),
        ))
    }
}

pub struct MapExercise {
    config: MapConfig,
}

impl Exercise for MapExercise {
    fn name(&self) -> &'static str {
        "map"
    }

    fn description(&self) -> &'static str {
        "Map: multiply every element by -1"
    }

    fn input(&self) -> Value {
        json!({ "values": self.config.values })
    }

    fn run(&self) -> Result<ExerciseReport> {
        let negated = negate_all(&self.config.values)?;
        Ok(report(self, json!(negated)))
    }
}

pub struct ReduceExercise {
    config: ReduceConfig,
}

impl Exercise for ReduceExercise {
    fn name(&self) -> &'static str {
        "reduce"
    }

    fn description(&self) -> &'static str {
        "Reduce: sum the values with and without an initial accumulator"
    }

    fn input(&self) -> Value {
        json!({ "values": self.config.values, "initial": self.config.initial })
    }

    fn run(&self) -> Result<ExerciseReport> {
        let values = &self.config.values;
        Ok(report(
            self,
            json!({
                "reduce": array_sum(values)?,
                "fold": sum_with_initial(values, self.config.initial)?,
            }),
        ))
    }
}

pub struct MostCommonExercise {
    config: FrequencyConfig,
}

impl Exercise for MostCommonExercise {
    fn name(&self) -> &'static str {
        "most_common"
    }

    fn description(&self) -> &'static str {
        "Reduce into a 26-slot tally and pick the most frequent letter"
    }

    fn input(&self) -> Value {
        json!({ "words": self.config.words })
    }

    fn run(&self) -> Result<ExerciseReport> {
        let tally = tally_letters(&self.config.words);
        let letter = tally.most_common().ok_or_else(|| DrillError::InvalidInput {
            message: "no ASCII letters to count".to_string(),
        })?;
        let counts: serde_json::Map<String, Value> = tally
            .seen()
            .map(|(c, n)| (c.to_string(), json!(n)))
            .collect();
        Ok(report(
            self,
            json!({
                "letter": letter.to_string(),
                "count": tally.count(letter),
                "tally": counts,
            }),
        ))
    }
}

/// Builds the named exercise from `config`, or `None` for an unknown name.
pub fn exercise_by_name(config: &DrillConfig, name: &str) -> Option<Box<dyn Exercise>> {
    let exercise: Box<dyn Exercise> = match name {
        "adder" => Box::new(AdderExercise {
            config: config.adder.clone(),
        }),
        "counter" => Box::new(CounterExercise {
            config: config.counter.clone(),
        }),
        "remover" => Box::new(RemoverExercise {
            config: config.remover.clone(),
        }),
        "fibonacci" => Box::new(FibonacciExercise {
            config: config.fibonacci.clone(),
        }),
        "filter" => Box::new(FilterExercise {
            config: config.filter.clone(),
        }),
        "map" => Box::new(MapExercise {
            config: config.map.clone(),
        }),
        "reduce" => Box::new(ReduceExercise {
            config: config.reduce.clone(),
        }),
        "most_common" => Box::new(MostCommonExercise {
            config: config.frequency.clone(),
        }),
        _ => return None,
    };
    Some(exercise)
}

/// All exercises in their default order when `only` is empty, otherwise the
/// named ones in the order given.
pub fn build_exercises(config: &DrillConfig, only: &[String]) -> Result<Vec<Box<dyn Exercise>>> {
    if only.is_empty() {
        return Ok(EXERCISE_NAMES
            .iter()
            .filter_map(|name| exercise_by_name(config, name))
            .collect());
    }

    only.iter()
        .map(|name| {
            let name = name.trim();
            exercise_by_name(config, name).ok_or_else(|| DrillError::InvalidConfigValueError {
                field: "only".to_string(),
                value: name.to_string(),
                reason: format!("Unknown exercise. Valid exercises: {}", EXERCISE_NAMES.join(", ")),
            })
        })
        .collect()
}
