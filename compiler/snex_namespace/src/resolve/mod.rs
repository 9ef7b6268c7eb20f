//! Identifier resolution.
//!
//! Lookup order for an identifier `id` seen in the namespace `C`:
//!
//! 1. `C` itself contains `id`.
//! 2. Unless `id` names an explicit parent: the lexical chain from `C` up
//!    to the root, innermost first, looking for `<scope>::<name>`.
//! 3. The explicit parent (or `C` for unqualified ids), retried relative to
//!    `C` when it is not an absolute namespace. Its direct member wins,
//!    otherwise every namespace it imports is searched and the matches must
//!    be unique. Unqualified ids keep searching the imports of each
//!    enclosing namespace up to the root; the first level with any match
//!    decides.

use smallvec::SmallVec;
use snex_ir::{Name, NamespacedIdentifier};
use tracing::trace;

use crate::{Namespace, NamespaceError, NamespaceHandler};

type Matches = SmallVec<[NamespacedIdentifier; 2]>;

impl NamespaceHandler {
    /// Rewrite `id` to the fully qualified id of the symbol it refers to.
    ///
    /// With `allow_zero_match`, an identifier that matches nothing is left
    /// unchanged instead of failing. An ambiguous match always fails.
    pub fn resolve(
        &self,
        id: &mut NamespacedIdentifier,
        allow_zero_match: bool,
    ) -> Result<(), NamespaceError> {
        let current = self
            .current
            .and_then(|ns| self.namespace(ns))
            .ok_or(NamespaceError::NoNamespace)?;
        self.resolve_from(current, id, allow_zero_match)
    }

    /// Like [`resolve`](Self::resolve), seen from the namespace `scope`
    /// instead of the cursor.
    pub fn resolve_in(
        &self,
        scope: &NamespacedIdentifier,
        id: &mut NamespacedIdentifier,
        allow_zero_match: bool,
    ) -> Result<(), NamespaceError> {
        let from = self
            .find_namespace(scope)
            .and_then(|ns| self.namespace(ns))
            .ok_or_else(|| NamespaceError::NamespaceNotFound {
                id: self.render(scope),
            })?;
        self.resolve_from(from, id, allow_zero_match)
    }

    fn resolve_from(
        &self,
        current: &Namespace,
        id: &mut NamespacedIdentifier,
        allow_zero_match: bool,
    ) -> Result<(), NamespaceError> {
        if current.contains(id) {
            return Ok(());
        }

        let name = id.identifier();
        let parent = id.parent();
        let unqualified = !parent.is_valid();
        let explicit_parent = !unqualified && parent != current.id;

        if !explicit_parent {
            let mut scope = Some(current);
            while let Some(ns) = scope {
                let candidate = ns.id.child(name);
                if ns.contains(&candidate) {
                    trace!(from = %self.render(id), to = %self.render(&candidate), "resolved lexically");
                    *id = candidate;
                    return Ok(());
                }
                scope = ns.parent.and_then(|p| self.namespace(p));
            }
        }

        let lookup = if unqualified {
            current.id.clone()
        } else {
            parent
        };
        let target = self.find_namespace(&lookup).or_else(|| {
            self.find_namespace(&lookup.relocate(&NamespacedIdentifier::root(), &current.id))
        });

        let mut level = target.and_then(|t| self.namespace(t));
        let mut matches = Matches::new();
        while let Some(ns) = level {
            matches = self.matches_in(ns, name);
            if !matches.is_empty() || !unqualified {
                break;
            }
            level = ns.parent.and_then(|p| self.namespace(p));
        }

        match matches.as_slice() {
            [] if allow_zero_match => Ok(()),
            [] => Err(NamespaceError::Unresolved {
                name: self.render(id),
            }),
            [single] => {
                trace!(from = %self.render(id), to = %self.render(single), "resolved");
                *id = single.clone();
                Ok(())
            }
            candidates => Err(NamespaceError::Ambiguous {
                name: self.render(id),
                candidates: candidates.iter().map(|c| self.render(c)).collect(),
            }),
        }
    }

    /// The direct member `name` of `ns`, or else every import providing it.
    fn matches_in(&self, ns: &Namespace, name: Name) -> Matches {
        let direct = ns.id.child(name);
        if ns.contains(&direct) {
            return std::iter::once(direct).collect();
        }
        ns.used
            .iter()
            .filter_map(|&u| self.namespace(u))
            .map(|used| (used, used.id.child(name)))
            .filter(|(used, candidate)| used.contains(candidate))
            .map(|(_, candidate)| candidate)
            .collect()
    }

    /// Resolve without failing; unresolvable ids come back unchanged.
    pub fn resolve_or_keep(&self, id: &NamespacedIdentifier) -> NamespacedIdentifier {
        let mut resolved = id.clone();
        match self.resolve(&mut resolved, true) {
            Ok(()) => resolved,
            Err(_) => id.clone(),
        }
    }
}
