//! Typed GPU buffer that grows when the data outgrows it.

use std::marker::PhantomData;

use wgpu::util::DeviceExt;

/// Storage or vertex buffer holding a slice of `T`.
///
/// Uses a 2x growth strategy when capacity is exceeded and never shrinks.
/// A write that reallocates returns `true` so the owner can rebuild any bind
/// group pointing at the old buffer.
pub struct TypedBuffer<T> {
    buffer: wgpu::Buffer,
    capacity: usize, // in items
    count: usize,
    usage: wgpu::BufferUsages,
    label: String,
    _marker: PhantomData<T>,
}

impl<T: bytemuck::Pod> TypedBuffer<T> {
    /// Buffer initialized from `data`. Always holds room for one item so it
    /// can be bound even when `data` is empty.
    pub fn new_with_data(
        device: &wgpu::Device,
        label: &str,
        data: &[T],
        usage: wgpu::BufferUsages,
    ) -> Self {
        let zeroed = [T::zeroed()];
        let contents = if data.is_empty() { &zeroed[..] } else { data };
        let buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents: bytemuck::cast_slice(contents),
                usage: usage | wgpu::BufferUsages::COPY_DST,
            });
        Self {
            buffer,
            capacity: contents.len(),
            count: data.len(),
            usage,
            label: label.to_owned(),
            _marker: PhantomData,
        }
    }

    /// Replace the contents with `data`, growing if necessary.
    ///
    /// Returns `true` if the buffer was reallocated.
    pub fn write(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        data: &[T],
    ) -> bool {
        let reallocated = if data.len() > self.capacity {
            let new_capacity = grown_capacity(self.capacity, data.len());
            self.buffer = device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(&self.label),
                size: (new_capacity * size_of::<T>()) as u64,
                usage: self.usage | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });
            log::debug!(
                "{}: grew from {} to {new_capacity} items",
                self.label,
                self.capacity
            );
            self.capacity = new_capacity;
            true
        } else {
            false
        };

        if !data.is_empty() {
            queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(data));
        }
        self.count = data.len();
        reallocated
    }

    /// The underlying wgpu buffer.
    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }

    /// Number of items written by the last upload.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Whether the last upload was empty.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Items the buffer can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

fn grown_capacity(current: usize, needed: usize) -> usize {
    (needed * 2).max(current + 64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn growth_at_least_doubles_the_request() {
        assert_eq!(grown_capacity(1, 1000), 2000);
        assert_eq!(grown_capacity(1000, 1001), 2002);
    }

    #[test]
    fn growth_always_adds_headroom() {
        assert_eq!(grown_capacity(100, 2), 164);
    }
}
