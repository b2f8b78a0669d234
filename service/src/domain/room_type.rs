//! [`RoomType`] definitions.

use std::{str::FromStr, sync::LazyLock};

use common::Money;
use derive_more::{AsRef, Display, Error};
use regex::Regex;

/// Rentable room category along with its weekly rate card.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoomType {
    /// ID of this [`RoomType`].
    pub id: Id,

    /// Human-readable [`Label`] of this [`RoomType`].
    pub label: Label,

    /// Weekly stay price before any discount.
    pub base_rate: Money,

    /// Weekly maintenance fee, never discounted.
    pub maintenance: Money,

    /// Price of a single night charged for leftover days that are not
    /// rounded into a whole week.
    pub extra_night: Money,
}

/// ID of a [`RoomType`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[as_ref(forward)]
pub struct Id(String);

impl Id {
    /// Creates a new [`Id`] if the given `id` is valid.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        Self::check(&id).then_some(Self(id))
    }

    /// Checks whether the given `id` is a valid [`Id`].
    fn check(id: impl AsRef<str>) -> bool {
        /// Regular expression checking [`Id`] invariants:
        /// - Must start with an ASCII letter;
        /// - Must contain only ASCII letters, digits, `_` or `-`;
        /// - Must be between 1 and 64 characters long.
        static REGEX: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^[A-Za-z][A-Za-z0-9_-]{0,63}$").expect("valid regex")
        });

        REGEX.is_match(id.as_ref())
    }
}

impl FromStr for Id {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `RoomTypeId`")
    }
}

/// Human-readable label of a [`RoomType`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(forward)]
pub struct Label(String);

impl Label {
    /// Creates a new [`Label`] if the given `label` is valid.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Option<Self> {
        let label = label.into();
        Self::check(&label).then_some(Self(label))
    }

    /// Checks whether the given `label` is a valid [`Label`].
    fn check(label: impl AsRef<str>) -> bool {
        let label = label.as_ref();
        label.trim() == label && !label.is_empty() && label.len() <= 128
    }
}

/// Ordered collection of [`RoomType`]s with unique [`Id`]s.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Catalog(Vec<RoomType>);

impl Catalog {
    /// Creates a new [`Catalog`] out of the provided [`RoomType`]s, keeping
    /// their order.
    ///
    /// # Errors
    ///
    /// Errors if several [`RoomType`]s share the same [`Id`].
    pub fn new(
        room_types: impl IntoIterator<Item = RoomType>,
    ) -> Result<Self, CatalogError> {
        let mut list: Vec<RoomType> = Vec::new();
        for room_type in room_types {
            if list.iter().any(|r| r.id == room_type.id) {
                return Err(CatalogError::DuplicateId(room_type.id));
            }
            list.push(room_type);
        }
        Ok(Self(list))
    }

    /// Returns the [`RoomType`] with the provided [`Id`], if any.
    #[must_use]
    pub fn get(&self, id: &Id) -> Option<&RoomType> {
        self.0.iter().find(|r| &r.id == id)
    }

    /// Iterates over [`RoomType`]s of this [`Catalog`] in their order.
    pub fn iter(&self) -> impl Iterator<Item = &RoomType> {
        self.0.iter()
    }

    /// Returns the number of [`RoomType`]s in this [`Catalog`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Indicates whether this [`Catalog`] has no [`RoomType`]s.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        let room_type = |id: &str, label: &str, rates: [u32; 3]| {
            let [base_rate, maintenance, extra_night] = rates.map(Money::from);
            RoomType {
                id: Id(id.to_owned()),
                label: Label(label.to_owned()),
                base_rate,
                maintenance,
                extra_night,
            }
        };

        Self(vec![
            room_type("oneRoom", "One-room", [150_000, 50_000, 40_000]),
            room_type("ownerUnit", "Owner unit", [500_000, 100_000, 100_000]),
            room_type("twoRoom", "Two-room", [250_000, 70_000, 60_000]),
        ])
    }
}

/// Error of building a [`Catalog`].
#[derive(Clone, Debug, Display, Error)]
pub enum CatalogError {
    /// Several [`RoomType`]s have the same [`Id`].
    #[display("`RoomType(id: {_0})` is defined more than once")]
    DuplicateId(#[error(not(source))] Id),
}

#[cfg(test)]
mod spec {
    use common::Money;

    use super::{Catalog, CatalogError, Id, Label, RoomType};

    fn room_type(id: &str) -> RoomType {
        RoomType {
            id: Id::new(id).unwrap(),
            label: Label::new(id.to_uppercase()).unwrap(),
            base_rate: Money::from(100_u32),
            maintenance: Money::from(10_u32),
            extra_night: Money::from(20_u32),
        }
    }

    #[test]
    fn id_format() {
        assert!(Id::new("oneRoom").is_some());
        assert!(Id::new("two_room-2").is_some());
        assert!(Id::new("a").is_some());
        assert!(Id::new("a".repeat(64)).is_some());

        assert!(Id::new("").is_none());
        assert!(Id::new("1room").is_none());
        assert!(Id::new("one room").is_none());
        assert!(Id::new(" oneRoom").is_none());
        assert!(Id::new("원룸").is_none());
        assert!(Id::new("a".repeat(65)).is_none());
    }

    #[test]
    fn label_format() {
        assert!(Label::new("One-room").is_some());
        assert!(Label::new("원룸").is_some());

        assert!(Label::new("").is_none());
        assert!(Label::new(" One-room").is_none());
        assert!(Label::new("One-room ").is_none());
    }

    #[test]
    fn default_catalog() {
        let catalog = Catalog::default();

        assert_eq!(catalog.len(), 3);
        assert_eq!(
            catalog.iter().map(|r| r.id.to_string()).collect::<Vec<_>>(),
            ["oneRoom", "ownerUnit", "twoRoom"],
        );

        let one_room = catalog.get(&Id::new("oneRoom").unwrap()).unwrap();
        assert_eq!(one_room.base_rate, Money::from(150_000_u32));
        assert_eq!(one_room.maintenance, Money::from(50_000_u32));
        assert_eq!(one_room.extra_night, Money::from(40_000_u32));

        let two_room = catalog.get(&Id::new("twoRoom").unwrap()).unwrap();
        assert_eq!(two_room.base_rate, Money::from(250_000_u32));
        assert_eq!(two_room.maintenance, Money::from(70_000_u32));
        assert_eq!(two_room.extra_night, Money::from(60_000_u32));

        assert!(catalog.get(&Id::new("penthouse").unwrap()).is_none());
    }

    #[test]
    fn keeps_order_of_arbitrary_catalog() {
        let catalog = Catalog::new(["c", "a", "b", "d"].map(room_type)).unwrap();

        assert_eq!(catalog.len(), 4);
        assert_eq!(
            catalog.iter().map(|r| r.id.to_string()).collect::<Vec<_>>(),
            ["c", "a", "b", "d"],
        );
        assert_eq!(catalog.get(&Id::new("d").unwrap()), Some(&room_type("d")));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = Catalog::new(["a", "b", "a"].map(room_type)).unwrap_err();

        assert!(matches!(
            err,
            CatalogError::DuplicateId(id) if id == Id::new("a").unwrap(),
        ));
    }

    #[test]
    fn allows_empty_catalog() {
        assert!(Catalog::new([]).unwrap().is_empty());
    }
}
