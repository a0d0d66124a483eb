pub type Weight = u32;
pub type Value = u32;
pub type TotalValue = u64;
pub type CityId = i64;
pub type NodeIndex = usize;
pub type Km = f64;

/// A knapsack item. Fields are preserved verbatim in solver results.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Item {
    pub name: String,
    pub weight: Weight,
    pub value: Value,
}

impl Item {
    pub fn new(name: impl Into<String>, weight: Weight, value: Value) -> Self {
        Item {
            name: name.into(),
            weight,
            value,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct City {
    pub id: CityId,
    pub name: Option<String>,
    pub lat: f64,
    pub lng: f64,
}

impl City {
    pub fn new(id: CityId, lat: f64, lng: f64) -> Self {
        City {
            id,
            name: None,
            lat,
            lng,
        }
    }

    pub fn named(id: CityId, name: impl Into<String>, lat: f64, lng: f64) -> Self {
        City {
            id,
            name: Some(name.into()),
            lat,
            lng,
        }
    }
}

/// Set of visited node indices, one bit per node.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Mask(u32);

impl Mask {
    /// Mask with only `index` set.
    #[inline(always)]
    pub fn singleton(index: NodeIndex) -> Self {
        debug_assert!(index < u32::BITS as usize, "Mask index out of range");
        Mask(1 << index)
    }

    /// Mask with the lowest `n` bits set.
    #[inline(always)]
    pub fn full(n: usize) -> Self {
        debug_assert!(n <= u32::BITS as usize, "Mask width out of range");
        if n == u32::BITS as usize {
            Mask(u32::MAX)
        } else {
            Mask((1 << n) - 1)
        }
    }

    #[inline(always)]
    pub fn from_raw(raw: u32) -> Self {
        Mask(raw)
    }

    #[inline(always)]
    pub fn raw(self) -> u32 {
        self.0
    }

    #[inline(always)]
    pub fn contains(self, index: NodeIndex) -> bool {
        self.0 & (1 << index) != 0
    }

    #[inline(always)]
    pub fn with(self, index: NodeIndex) -> Self {
        Mask(self.0 | (1 << index))
    }

    #[inline(always)]
    pub fn without(self, index: NodeIndex) -> Self {
        Mask(self.0 & !(1 << index))
    }

    /// Number of members.
    #[inline(always)]
    pub fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Iterates over the member indices in ascending order.
    pub fn members(self) -> impl Iterator<Item = NodeIndex> {
        let mut bits = self.0;
        std::iter::from_fn(move || {
            if bits == 0 {
                return None;
            }
            let index = bits.trailing_zeros() as NodeIndex;
            bits &= bits - 1;
            Some(index)
        })
    }
}
