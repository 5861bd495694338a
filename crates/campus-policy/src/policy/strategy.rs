use std::fmt;

use serde::{Deserialize, Serialize};

/// A named predicate over a discriminant paired with the value it contributes.
pub trait Strategy<D: ?Sized, V>: Send + Sync {
    fn name(&self) -> &str;
    fn supports(&self, discriminant: &D) -> bool;
    fn value(&self) -> V;
}

/// Value picked for one discriminant. `matched` is `None` when the fallback was used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution<V> {
    pub value: V,
    pub matched: Option<String>,
}

impl<V> Resolution<V> {
    pub fn is_fallback(&self) -> bool {
        self.matched.is_none()
    }
}

/// First-match resolution over an ordered slice; exhausting it yields `fallback`.
pub fn resolve<D, V>(strategies: &[Box<dyn Strategy<D, V>>], discriminant: &D, fallback: V) -> Resolution<V>
where
    D: ?Sized,
{
    for strategy in strategies {
        if strategy.supports(discriminant) {
            return Resolution {
                value: strategy.value(),
                matched: Some(strategy.name().to_string()),
            };
        }
    }

    Resolution {
        value: fallback,
        matched: None,
    }
}

/// Ordered strategies plus the fallback used when none of them applies.
pub struct StrategyTable<D: ?Sized, V> {
    strategies: Vec<Box<dyn Strategy<D, V>>>,
    fallback: V,
}

impl<D, V> StrategyTable<D, V>
where
    D: ?Sized,
    V: Clone,
{
    pub fn new(strategies: Vec<Box<dyn Strategy<D, V>>>, fallback: V) -> Self {
        Self {
            strategies,
            fallback,
        }
    }

    pub fn builder(fallback: V) -> StrategyTableBuilder<D, V> {
        StrategyTableBuilder {
            strategies: Vec::new(),
            fallback,
        }
    }

    pub fn fallback(&self) -> &V {
        &self.fallback
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    pub fn resolve(&self, discriminant: &D) -> Resolution<V> {
        resolve(&self.strategies, discriminant, self.fallback.clone())
    }

    /// Resolves each discriminant independently against the same ordered table.
    pub fn resolve_each<'a, I>(&self, discriminants: I) -> Vec<Resolution<V>>
    where
        I: IntoIterator<Item = &'a D>,
        D: 'a,
    {
        discriminants
            .into_iter()
            .map(|discriminant| self.resolve(discriminant))
            .collect()
    }
}

impl<D: ?Sized, V: fmt::Debug> fmt::Debug for StrategyTable<D, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.strategies.iter().map(|s| s.name()).collect();
        f.debug_struct("StrategyTable")
            .field("strategies", &names)
            .field("fallback", &self.fallback)
            .finish()
    }
}

pub struct StrategyTableBuilder<D: ?Sized, V> {
    strategies: Vec<Box<dyn Strategy<D, V>>>,
    fallback: V,
}

impl<D, V> StrategyTableBuilder<D, V>
where
    D: ?Sized,
    V: Clone,
{
    pub fn strategy<T>(mut self, strategy: T) -> Self
    where
        T: Strategy<D, V> + 'static,
    {
        self.strategies.push(Box::new(strategy));
        self
    }

    pub fn build(self) -> StrategyTable<D, V> {
        StrategyTable::new(self.strategies, self.fallback)
    }
}

/// Matches a single discriminant by equality.
#[derive(Debug, Clone, PartialEq)]
pub struct Fixed<D, V> {
    name: String,
    key: D,
    value: V,
}

impl<D, V> Fixed<D, V> {
    pub fn new(name: impl Into<String>, key: D, value: V) -> Self {
        Self {
            name: name.into(),
            key,
            value,
        }
    }
}

impl<D, V> Strategy<D, V> for Fixed<D, V>
where
    D: PartialEq + Send + Sync,
    V: Clone + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn supports(&self, discriminant: &D) -> bool {
        self.key == *discriminant
    }

    fn value(&self) -> V {
        self.value.clone()
    }
}

/// Strategy backed by a predicate closure.
pub struct FnStrategy<V, F> {
    name: String,
    value: V,
    supports: F,
}

pub fn strategy_fn<D, V, F>(name: impl Into<String>, value: V, supports: F) -> FnStrategy<V, F>
where
    D: ?Sized,
    F: Fn(&D) -> bool + Send + Sync,
{
    FnStrategy {
        name: name.into(),
        value,
        supports,
    }
}

impl<D, V, F> Strategy<D, V> for FnStrategy<V, F>
where
    D: ?Sized,
    V: Clone + Send + Sync,
    F: Fn(&D) -> bool + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn supports(&self, discriminant: &D) -> bool {
        (self.supports)(discriminant)
    }

    fn value(&self) -> V {
        self.value.clone()
    }
}
