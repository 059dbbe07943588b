mod region;

pub use self::region::{FileRegion, MemoryRegion, MemoryRegionMut, RegionRead, RegionWrite};
