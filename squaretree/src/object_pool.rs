/// A bounded cache of reusable scratch objects.
///
/// Objects leave the pool by value, so a checked out object is owned by exactly
/// one operation until it is checked back in.
pub(crate) struct ObjectPool<T: Resettable> {
    free: Vec<T>,
    max_size: usize,
}

impl<T> ObjectPool<T>
where
    T: Resettable,
{
    pub fn new(max_size: usize) -> Self {
        ObjectPool {
            free: Vec::with_capacity(max_size),
            max_size,
        }
    }

    // Take a cached object, or build a fresh one when the cache is empty
    pub fn checkout(&mut self) -> T
    where
        T: Default,
    {
        self.free.pop().unwrap_or_default()
    }

    // Objects beyond max_size are dropped instead of cached
    pub fn checkin(&mut self, mut obj: T) {
        if self.free.len() < self.max_size {
            obj.reset();
            self.free.push(obj);
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.free.len()
    }
}

pub(crate) trait Resettable {
    fn reset(&mut self);
}
