//! Asset boundary
//!
//! The collaborator owns real images. It exposes base images and three pure
//! derivations (tint, scale, mirror); [`SpriteCache`] chains them per
//! [`SpriteKey`] and remembers the result so each variant is built once.

use std::collections::HashMap;

use super::frame::{Rgb, SpriteImage, SpriteKey};

/// Image operations supplied by the asset collaborator
pub trait AssetOps {
    type Handle: Clone;

    fn base(&mut self, image: SpriteImage) -> Self::Handle;
    /// Horizontal flip
    fn mirror(&mut self, handle: &Self::Handle) -> Self::Handle;
    fn scale(&mut self, handle: &Self::Handle, size: (u32, u32)) -> Self::Handle;
    /// Multiply blend
    fn tint(&mut self, handle: &Self::Handle, color: Rgb) -> Self::Handle;
}

/// Memoising resolver from sprite keys to collaborator handles
pub struct SpriteCache<A: AssetOps> {
    ops: A,
    cache: HashMap<SpriteKey, A::Handle>,
}

impl<A: AssetOps> SpriteCache<A> {
    pub fn new(ops: A) -> Self {
        Self {
            ops,
            cache: HashMap::new(),
        }
    }

    /// Handle for `key`, building it as tint → scale → mirror on first use
    pub fn resolve(&mut self, key: &SpriteKey) -> A::Handle {
        if let Some(handle) = self.cache.get(key) {
            return handle.clone();
        }
        let mut handle = self.ops.base(key.image);
        if let Some(color) = key.tint {
            handle = self.ops.tint(&handle, color);
        }
        handle = self.ops.scale(&handle, key.size);
        if key.mirrored {
            handle = self.ops.mirror(&handle);
        }
        self.cache.insert(*key, handle.clone());
        handle
    }

    /// Distinct variants built so far
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn ops(&self) -> &A {
        &self.ops
    }
}

/// Stand-in image: what a real image would look like after its derivations
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamedHandle {
    pub image: SpriteImage,
    pub size: Option<(u32, u32)>,
    pub mirrored: bool,
    /// Accumulated multiply colour (white = untinted)
    pub color: Rgb,
}

/// Headless asset collaborator that records derivations instead of pixels
#[derive(Debug, Default)]
pub struct NamedAssets {
    /// Derivation calls made (base loads excluded)
    pub operations: usize,
}

impl AssetOps for NamedAssets {
    type Handle = NamedHandle;

    fn base(&mut self, image: SpriteImage) -> NamedHandle {
        NamedHandle {
            image,
            size: None,
            mirrored: false,
            color: Rgb::new(255, 255, 255),
        }
    }

    fn mirror(&mut self, handle: &NamedHandle) -> NamedHandle {
        self.operations += 1;
        NamedHandle {
            mirrored: !handle.mirrored,
            ..handle.clone()
        }
    }

    fn scale(&mut self, handle: &NamedHandle, size: (u32, u32)) -> NamedHandle {
        self.operations += 1;
        NamedHandle {
            size: Some(size),
            ..handle.clone()
        }
    }

    fn tint(&mut self, handle: &NamedHandle, color: Rgb) -> NamedHandle {
        self.operations += 1;
        NamedHandle {
            color: handle.color.multiply(color),
            ..handle.clone()
        }
    }
}
