use serde::{Deserialize, Serialize};

/// An orderable drink, in the shape of a `cocktails.json` entry.
///
/// `amounts[i]` is the number of shots of `ingredients[i]`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Cocktail {
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub amounts: Vec<u32>,
}

impl Cocktail {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ingredients: Vec::new(),
            amounts: Vec::new(),
        }
    }

    pub fn with_ingredient(mut self, ingredient: impl Into<String>, shots: u32) -> Self {
        self.ingredients.push(ingredient.into());
        self.amounts.push(shots);
        self
    }
}

/// Ordered sequence of cocktails currently on offer.
pub type CocktailList = Vec<Cocktail>;

/// State rendered by the home page.
///
/// Starts out with an empty cocktail list. Whoever owns the state may replace
/// or extend the list; rendering only ever reads it. Deserializes from the
/// `{"cocktails": [...]}` catalog layout as well as from `cocktail_list`.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct HomeState {
    #[serde(default, alias = "cocktails")]
    pub cocktail_list: CocktailList,
}

impl HomeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cocktails(cocktail_list: CocktailList) -> Self {
        Self { cocktail_list }
    }

    pub fn has_cocktails(&self) -> bool {
        !self.cocktail_list.is_empty()
    }
}
