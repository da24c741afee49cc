use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use hashbrown::HashMap as FastHashMap;
use parking_lot::RwLock;

use super::compiled::{CompiledPattern, CompiledTemplate, Template, compile_pattern};
use super::TemplateResult;

pub const DEFAULT_COMPILE_CACHE_CAPACITY: usize = 64;

/// Memoizes compiled patterns by their pattern string.
///
/// The cache is owned by whoever builds registries; nothing in the crate
/// keeps a process-wide instance. Once full, the oldest pattern is evicted.
#[derive(Debug)]
pub struct CompileCache {
    capacity: usize,
    state: RwLock<CacheState>,
    hits: AtomicU64,
    misses: AtomicU64,
}

#[derive(Debug, Default)]
struct CacheState {
    map: FastHashMap<String, Arc<CompiledPattern>>,
    order: VecDeque<String>,
}

impl CompileCache {
    pub fn new(capacity: usize) -> Self {
        let cap = capacity.max(1);
        Self {
            capacity: cap,
            state: RwLock::new(CacheState {
                map: FastHashMap::with_capacity(cap),
                order: VecDeque::with_capacity(cap),
            }),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.state.read().map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `(hits, misses)`.
    pub fn metrics(&self) -> (u64, u64) {
        (
            self.hits.load(Ordering::Relaxed),
            self.misses.load(Ordering::Relaxed),
        )
    }

    pub fn clear(&self) {
        let mut state = self.state.write();
        state.map.clear();
        state.order.clear();
    }

    pub fn compile(&self, template: &Template) -> TemplateResult<CompiledTemplate> {
        let shared = self.get_or_compile(&template.pattern)?;
        Ok(CompiledTemplate::from_shared(template.key, shared))
    }

    pub fn compile_all(&self, templates: &[Template]) -> TemplateResult<Vec<CompiledTemplate>> {
        templates.iter().map(|t| self.compile(t)).collect()
    }

    fn get_or_compile(&self, pattern: &str) -> TemplateResult<Arc<CompiledPattern>> {
        if let Some(hit) = self.state.read().map.get(pattern) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(Arc::clone(hit));
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let compiled = Arc::new(compile_pattern(pattern)?);

        let mut state = self.state.write();
        // another thread may have compiled the same pattern meanwhile
        if let Some(existing) = state.map.get(pattern) {
            return Ok(Arc::clone(existing));
        }

        if state.order.len() == self.capacity
            && let Some(oldest) = state.order.pop_front()
        {
            state.map.remove(&oldest);
            tracing::trace!(pattern = %oldest, "evicted compiled template");
        }

        state.order.push_back(pattern.to_string());
        state.map.insert(pattern.to_string(), Arc::clone(&compiled));
        Ok(compiled)
    }
}

impl Default for CompileCache {
    fn default() -> Self {
        Self::new(DEFAULT_COMPILE_CACHE_CAPACITY)
    }
}
