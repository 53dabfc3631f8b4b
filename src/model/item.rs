//! Grid item record.

use serde::{Deserialize, Serialize};

const LONG_DESCRIPTION: &str = "Lorem ipsum is placeholder text commonly used in the graphic, print, and publishing industries for previewing layouts and visual mockups";
const SHORT_DESCRIPTION: &str = "Generated 1 paragraph, 5 words, 27 bytes of Lorem Ipsum";
const TALL_IMAGE: &str = "https://picsum.photos/200/300?grayscale";
const SQUARE_IMAGE: &str = "https://picsum.photos/200";

/// One cell of the grid: an image with a title and a description below it.
///
/// Identity is by value. Items are built by a data source and are read-only
/// inside the layout core.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    /// Heavy-weight heading text.
    pub title: String,
    /// Body text under the title.
    pub description: String,
    /// URI of the image shown above the text.
    pub image_reference: String,
}

impl Item {
    /// Create a new item.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        image_reference: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            image_reference: image_reference.into(),
        }
    }

    /// Generate `count` demo items.
    ///
    /// Even indices get a long description and a tall grayscale image, odd
    /// indices a short description and a square image, so the resulting grid
    /// is visibly staggered.
    ///
    /// # Examples
    ///
    /// ```
    /// use masonry_grid::model::Item;
    ///
    /// let items = Item::sample(3);
    /// assert_eq!(items[2].title, "Title: 2");
    /// assert_eq!(items[0].description, items[2].description);
    /// assert_ne!(items[0].description, items[1].description);
    /// ```
    pub fn sample(count: usize) -> Vec<Item> {
        (0..count)
            .map(|i| {
                let (description, image) = if i % 2 == 0 {
                    (LONG_DESCRIPTION, TALL_IMAGE)
                } else {
                    (SHORT_DESCRIPTION, SQUARE_IMAGE)
                };
                Item::new(format!("Title: {i}"), description, image)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_of_zero_is_empty() {
        assert!(Item::sample(0).is_empty());
    }

    #[test]
    fn sample_alternates_images() {
        let items = Item::sample(4);
        assert_eq!(items[0].image_reference, TALL_IMAGE);
        assert_eq!(items[1].image_reference, SQUARE_IMAGE);
        assert_eq!(items[2].image_reference, TALL_IMAGE);
        assert_eq!(items[3].image_reference, SQUARE_IMAGE);
    }

    #[test]
    fn equality_is_by_value() {
        let a = Item::new("t", "d", "https://example.com/a.png");
        let b = Item::new("t", "d", "https://example.com/a.png");
        let c = Item::new("t", "d", "https://example.com/b.png");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
