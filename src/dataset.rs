//! Struct `Dataset` represents a batch of records
//! whose last item is the class attribute.
use serde::{Serialize, Deserialize};

use crate::error::{CmarError, Result};
use crate::itemset::{ClassId, Item, Itemset};


/// The class attributes of a dataset.
/// Classes occupy the `count` consecutive attribute ids
/// starting from `first`, i.e. the last ids after renumbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassLabels {
    first: ClassId,
    count: usize,
}


impl ClassLabels {
    /// Construct the class labels `first, first + 1, ..., first + count - 1`.
    pub fn new(first: ClassId, count: usize) -> Self {
        assert!(first > 0, "attribute id `0` is reserved for `unclassified`");
        assert!(
            first as usize + count <= Item::MAX as usize + 1,
            "class ids overflow the attribute id range"
        );
        Self { first, count }
    }


    /// Construct the class labels of a dataset with `n_attributes`
    /// attributes (numbered from `1`), the last `n_classes` of which
    /// are the classes.
    pub fn from_top(n_attributes: usize, n_classes: usize) -> Self {
        assert!(
            0 < n_classes && n_classes <= n_attributes,
            "the number of classes must be in `1..=n_attributes`"
        );
        let first = n_attributes - n_classes + 1;
        let first = ClassId::try_from(first)
            .expect("attribute ids must fit into `u16`");
        Self::new(first, n_classes)
    }


    /// Returns the number of classes.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }


    /// Returns `true` if there is no class.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }


    /// Returns `true` if `item` is a class attribute.
    #[inline]
    pub fn contains(&self, item: Item) -> bool {
        self.index_of(item).is_some()
    }


    /// Returns the position of `class` among the labels.
    #[inline]
    pub fn index_of(&self, class: ClassId) -> Option<usize> {
        let offset = class.checked_sub(self.first)? as usize;
        (offset < self.count).then_some(offset)
    }


    /// Returns the class ids in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = ClassId> {
        let first = self.first;
        (0..self.count).map(move |i| first + i as ClassId)
    }
}


/// A set of records.
/// Each record is an [`Itemset`] whose last (largest) item is its class.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<Itemset>,
    labels: ClassLabels,
}


impl Dataset {
    /// Construct a new dataset.
    /// Every record must be non-empty and end with a class attribute.
    pub fn new(records: Vec<Itemset>, labels: ClassLabels) -> Result<Self> {
        for (row, record) in records.iter().enumerate() {
            let item = record.last()
                .ok_or(CmarError::EmptyRecord { row })?;
            if !labels.contains(item) {
                return Err(CmarError::UnknownClass { row, item });
            }
        }
        Ok(Self { records, labels })
    }


    /// Construct a new dataset from raw rows.
    /// Each row must be strictly increasing.
    pub fn from_rows<I>(rows: I, labels: ClassLabels) -> Result<Self>
        where I: IntoIterator<Item = Vec<Item>>
    {
        let records = rows.into_iter()
            .map(Itemset::new)
            .collect::<Result<Vec<_>>>()?;
        Self::new(records, labels)
    }


    /// Returns the number of records.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }


    /// Returns `true` if there is no record.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }


    /// Returns the records.
    #[inline]
    pub fn records(&self) -> &[Itemset] {
        &self.records[..]
    }


    /// Returns the class labels.
    #[inline]
    pub fn labels(&self) -> &ClassLabels {
        &self.labels
    }


    /// Returns the class of the `row`'th record.
    #[inline]
    pub fn class_of(&self, row: usize) -> ClassId {
        // `Dataset::new` guarantees a non-empty record.
        self.records[row].last()
            .unwrap_or(crate::itemset::UNCLASSIFIED)
    }


    /// Split the dataset into two parts.
    /// The records `ix[start..end]` form the second part,
    /// the remaining records, in the order of `ix`, form the first one.
    pub fn split(&self, ix: &[usize], start: usize, end: usize)
        -> (Dataset, Dataset)
    {
        let end = end.min(ix.len());
        let start = start.min(end);

        let pick = |rows: &[usize]| -> Vec<Itemset> {
            rows.iter().map(|&i| self.records[i].clone()).collect()
        };

        let mut train = pick(&ix[..start]);
        train.extend(pick(&ix[end..]));
        let test = pick(&ix[start..end]);

        let train = Dataset { records: train, labels: self.labels };
        let test = Dataset { records: test, labels: self.labels };
        (train, test)
    }
}
