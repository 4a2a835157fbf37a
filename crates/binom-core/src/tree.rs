//! Triangular storage for recombining binomial trees.
//!
//! A recombining tree of horizon `T` has `T + 1` time layers and layer `t`
//! holds `t + 1` distinct nodes, one per number of up moves `k = 0..=t`.
//! All nodes live in a single flat buffer addressed by `t(t+1)/2 + k`.
//!
//! ```text
//!  t = 0          (0,0)                     slot 0
//!  t = 1      (1,0)    (1,1)                slots 1..=2
//!  t = 2  (2,0)    (2,1)    (2,2)           slots 3..=5
//! ```

use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::error::{BinomError, BinomResult};

/// A recombining binomial tree stored as one contiguous arena.
///
/// Every slot starts unset. Values are written with [`set`](Self::set) and
/// read back with [`get`](Self::get); both reject addresses outside the
/// triangular region `0 <= k <= t <= horizon`.
///
/// # Example
///
/// ```rust
/// use binom_core::TriangularTree;
///
/// let mut tree = TriangularTree::new(2).unwrap();
/// tree.set(2, 1, 99.0).unwrap();
/// assert_eq!(*tree.get(2, 1).unwrap(), 99.0);
/// assert!(tree.get(3, 0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TriangularTree<V> {
    horizon: usize,
    slots: Vec<Option<V>>,
}

impl<V> TriangularTree<V> {
    /// Allocates an empty tree with `horizon + 1` layers.
    ///
    /// Fails with [`BinomError::InvalidHorizon`] when the slot count does not
    /// fit in `usize` or the arena cannot be allocated.
    pub fn new(horizon: usize) -> BinomResult<Self> {
        let invalid = || BinomError::InvalidHorizon {
            horizon: i64::try_from(horizon).unwrap_or(i64::MAX),
        };
        let count = Self::nodes_for_horizon(horizon).ok_or_else(invalid)?;

        let mut slots = Vec::new();
        slots.try_reserve_exact(count).map_err(|_| invalid())?;
        slots.resize_with(count, || None);

        Ok(Self { horizon, slots })
    }

    /// Allocates an empty tree from a signed horizon.
    ///
    /// Fails with [`BinomError::InvalidHorizon`] when `horizon < 0`.
    pub fn with_horizon(horizon: i64) -> BinomResult<Self> {
        let horizon = usize::try_from(horizon).map_err(|_| BinomError::InvalidHorizon { horizon })?;
        Self::new(horizon)
    }

    /// Number of slots needed for a tree of the given horizon: `(T+1)(T+2)/2`.
    ///
    /// `None` when the count overflows `usize`.
    #[must_use]
    pub fn nodes_for_horizon(horizon: usize) -> Option<usize> {
        let layers = horizon.checked_add(1)?;
        let widest = horizon.checked_add(2)?;
        // one of two consecutive integers is even
        if layers % 2 == 0 {
            (layers / 2).checked_mul(widest)
        } else {
            layers.checked_mul(widest / 2)
        }
    }

    /// Flat slot index of node `(t, k)`. Does not check bounds.
    #[must_use]
    pub fn index_of(t: usize, k: usize) -> usize {
        t * (t + 1) / 2 + k
    }

    /// Returns the horizon `T` (index of the last layer).
    #[must_use]
    pub fn horizon(&self) -> usize {
        self.horizon
    }

    /// Returns the total number of nodes in the tree.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if `(t, k)` addresses a node of this tree.
    #[must_use]
    pub fn contains(&self, t: usize, k: usize) -> bool {
        t <= self.horizon && k <= t
    }

    fn checked_index(&self, t: usize, k: usize) -> BinomResult<usize> {
        if self.contains(t, k) {
            Ok(Self::index_of(t, k))
        } else {
            Err(BinomError::out_of_range(t, k, self.horizon))
        }
    }

    /// Writes `value` at node `(t, k)`, replacing any previous value.
    pub fn set(&mut self, t: usize, k: usize, value: V) -> BinomResult<()> {
        let index = self.checked_index(t, k)?;
        self.slots[index] = Some(value);
        Ok(())
    }

    /// Reads the value at node `(t, k)`.
    ///
    /// # Errors
    ///
    /// - [`BinomError::IndexOutOfRange`] if `(t, k)` is outside the tree.
    /// - [`BinomError::UninitializedNode`] if the node was never written.
    pub fn get(&self, t: usize, k: usize) -> BinomResult<&V> {
        let index = self.checked_index(t, k)?;
        self.slots[index]
            .as_ref()
            .ok_or(BinomError::UninitializedNode { t, k })
    }

    /// Returns true if node `(t, k)` exists and has been written.
    #[must_use]
    pub fn is_set(&self, t: usize, k: usize) -> bool {
        self.checked_index(t, k)
            .map(|index| self.slots[index].is_some())
            .unwrap_or(false)
    }

    /// Returns true once every node of the tree has been written.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Returns the values of layer `t`, ordered by increasing `k`.
    pub fn layer(&self, t: usize) -> BinomResult<Vec<&V>> {
        if t > self.horizon {
            return Err(BinomError::out_of_range(t, 0, self.horizon));
        }
        (0..=t).map(|k| self.get(t, k)).collect()
    }

    /// Iterates over written nodes as `(t, k, value)`, layer by layer.
    pub fn nodes(&self) -> impl Iterator<Item = (usize, usize, &V)> + '_ {
        (0..=self.horizon).flat_map(move |t| {
            (0..=t).filter_map(move |k| {
                self.slots[Self::index_of(t, k)]
                    .as_ref()
                    .map(|value| (t, k, value))
            })
        })
    }
}

/// Serializes as an array of layers; unset nodes become `null`.
impl<V: Serialize> Serialize for TriangularTree<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.horizon + 1))?;
        for t in 0..=self.horizon {
            let start = Self::index_of(t, 0);
            seq.serialize_element(&self.slots[start..=start + t])?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn test_node_count() {
        assert_eq!(TriangularTree::<f64>::new(0).unwrap().node_count(), 1);
        assert_eq!(TriangularTree::<f64>::new(1).unwrap().node_count(), 3);
        assert_eq!(TriangularTree::<f64>::new(2).unwrap().node_count(), 6);
        assert_eq!(TriangularTree::<f64>::new(10).unwrap().node_count(), 66);
    }

    #[test]
    fn test_index_is_bijection() {
        for horizon in 0..25 {
            let n = TriangularTree::<f64>::nodes_for_horizon(horizon).unwrap();
            let mut seen = HashSet::new();
            for t in 0..=horizon {
                for k in 0..=t {
                    let index = TriangularTree::<f64>::index_of(t, k);
                    assert!(index < n);
                    assert!(seen.insert(index), "duplicate slot for ({t}, {k})");
                }
            }
            assert_eq!(seen.len(), n);
        }
    }

    #[test]
    fn test_set_and_get() {
        let mut tree = TriangularTree::new(3).unwrap();
        tree.set(0, 0, 100.0).unwrap();
        tree.set(2, 1, 99.0).unwrap();
        tree.set(3, 3, 133.1).unwrap();

        assert_eq!(*tree.get(0, 0).unwrap(), 100.0);
        assert_eq!(*tree.get(2, 1).unwrap(), 99.0);
        assert_eq!(*tree.get(3, 3).unwrap(), 133.1);

        tree.set(2, 1, 42.0).unwrap();
        assert_eq!(*tree.get(2, 1).unwrap(), 42.0);
    }

    #[test]
    fn test_out_of_range() {
        for horizon in 0..6 {
            let mut tree: TriangularTree<f64> = TriangularTree::new(horizon).unwrap();
            assert_eq!(
                tree.get(horizon + 1, 0),
                Err(BinomError::out_of_range(horizon + 1, 0, horizon))
            );
            for t in 0..=horizon {
                assert_eq!(
                    tree.get(t, t + 1),
                    Err(BinomError::out_of_range(t, t + 1, horizon))
                );
                assert!(tree.set(t, t + 1, 1.0).is_err());
            }
            assert!(tree.set(horizon + 1, 0, 1.0).is_err());
        }
    }

    #[test]
    fn test_uninitialized_node() {
        let tree: TriangularTree<f64> = TriangularTree::new(2).unwrap();
        assert_eq!(
            tree.get(1, 0),
            Err(BinomError::UninitializedNode { t: 1, k: 0 })
        );
        assert!(!tree.is_set(1, 0));
        assert!(!tree.is_filled());
    }

    #[test]
    fn test_negative_horizon() {
        let err = TriangularTree::<f64>::with_horizon(-1).unwrap_err();
        assert_eq!(err, BinomError::InvalidHorizon { horizon: -1 });
        assert!(err.is_configuration_error());

        let tree = TriangularTree::<f64>::with_horizon(4).unwrap();
        assert_eq!(tree.horizon(), 4);
    }

    #[test]
    fn test_unaddressable_horizon() {
        assert_eq!(TriangularTree::<f64>::nodes_for_horizon(usize::MAX), None);
        assert_eq!(TriangularTree::<f64>::nodes_for_horizon(usize::MAX - 1), None);

        let err = TriangularTree::<f64>::new(usize::MAX).unwrap_err();
        assert_eq!(err, BinomError::InvalidHorizon { horizon: i64::MAX });
        assert!(err.is_configuration_error());

        assert!(matches!(
            TriangularTree::<f64>::with_horizon(i64::MAX),
            Err(BinomError::InvalidHorizon { .. })
        ));

        // slot count fits in usize but the arena does not fit in memory
        assert_eq!(
            TriangularTree::<f64>::new(1 << 32).unwrap_err(),
            BinomError::InvalidHorizon { horizon: 1 << 32 }
        );
    }

    #[test]
    fn test_layer_and_nodes() {
        let mut tree = TriangularTree::new(2).unwrap();
        for t in 0..=2 {
            for k in 0..=t {
                tree.set(t, k, (10 * t + k) as u32).unwrap();
            }
        }
        assert!(tree.is_filled());
        assert_eq!(tree.layer(2).unwrap(), vec![&20, &21, &22]);
        assert!(tree.layer(3).is_err());

        let visited: Vec<_> = tree.nodes().map(|(t, k, v)| (t, k, *v)).collect();
        assert_eq!(visited.len(), 6);
        assert_eq!(visited[0], (0, 0, 0));
        assert_eq!(visited[5], (2, 2, 22));
    }

    #[test]
    fn test_serialize_as_layers() {
        let mut tree = TriangularTree::new(1).unwrap();
        tree.set(0, 0, 1.5).unwrap();
        tree.set(1, 1, 2.5).unwrap();
        let json = serde_json::to_string(&tree).unwrap();
        assert_eq!(json, "[[1.5],[null,2.5]]");
    }

    proptest! {
        #[test]
        fn prop_written_value_is_read_back(horizon in 0usize..40, t_frac in 0.0f64..1.0, k_frac in 0.0f64..1.0, value in -1e6f64..1e6) {
            let t = ((horizon as f64) * t_frac) as usize;
            let k = ((t as f64) * k_frac) as usize;
            let mut tree = TriangularTree::new(horizon).unwrap();
            tree.set(t, k, value).unwrap();
            prop_assert_eq!(*tree.get(t, k).unwrap(), value);
            prop_assert_eq!(tree.nodes().count(), 1);
        }
    }
}
