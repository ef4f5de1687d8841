//! View state of the dashboard and the reducer that updates it.

use std::collections::HashSet;

use crate::domain::filters::{Availability, ProductFilters};
use crate::domain::product::Product;
use crate::resources::ProductsParams;

/// Change to one of the search bar fields.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterChange {
    Name(String),
    Categories(Vec<String>),
    Availability(Availability),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetFilter(FilterChange),
    SetPage(usize),
    NextPage,
    PrevPage,
    ResetFilters,
    /// Opens the product form, pre-populated when a product is given.
    OpenForm(Option<Product>),
    CloseForm,
}

#[derive(Debug, Clone)]
pub struct ViewState {
    name: String,
    selected_categories: Vec<String>,
    availability: Availability,
    page: usize,
    page_size: usize,
    categories: Vec<String>,
    editing: Option<Product>,
    show_form: bool,
    filters: ProductFilters,
}

impl ViewState {
    pub fn new(page_size: usize) -> Self {
        Self {
            name: String::new(),
            selected_categories: Vec::new(),
            availability: Availability::All,
            page: 0,
            page_size,
            categories: Vec::new(),
            editing: None,
            show_form: false,
            filters: ProductFilters::default(),
        }
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::SetFilter(change) => {
                match change {
                    FilterChange::Name(name) => self.name = name,
                    FilterChange::Categories(categories) => self.selected_categories = categories,
                    FilterChange::Availability(availability) => self.availability = availability,
                }
                self.refresh_filters();
            }
            Action::SetPage(page) => self.page = page,
            Action::NextPage => self.page += 1,
            Action::PrevPage => self.page = self.page.saturating_sub(1),
            Action::ResetFilters => {
                self.name.clear();
                self.selected_categories.clear();
                self.availability = Availability::All;
                self.page = 0;
                self.refresh_filters();
            }
            Action::OpenForm(product) => {
                self.editing = product;
                self.show_form = true;
            }
            Action::CloseForm => self.show_form = false,
        }
    }

    /// Re-derives the filters, keeping the previous value when nothing changed.
    fn refresh_filters(&mut self) {
        let filters =
            ProductFilters::derive(&self.name, &self.selected_categories, self.availability);
        if filters != self.filters {
            self.filters = filters;
        }
    }

    /// Replaces the category options with the distinct categories of `products`.
    pub fn sync_categories(&mut self, products: &[Product]) {
        let mut seen = HashSet::new();
        self.categories = products
            .iter()
            .map(|p| p.category.to_string())
            .filter(|c| seen.insert(c.clone()))
            .collect();
    }

    pub fn products_params(&self) -> ProductsParams {
        ProductsParams::new(self.page, self.page_size, self.filters.clone())
    }

    pub fn filters(&self) -> &ProductFilters {
        &self.filters
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn selected_categories(&self) -> &[String] {
        &self.selected_categories
    }

    pub fn availability(&self) -> Availability {
        self.availability
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn editing(&self) -> Option<&Product> {
        self.editing.as_ref()
    }

    pub fn show_form(&self) -> bool {
        self.show_form
    }

    pub fn can_go_prev(&self) -> bool {
        self.page > 0
    }

    /// A short page means the end of the list; the backend reports no totals.
    pub fn can_go_next(&self, loaded: usize) -> bool {
        loaded >= self.page_size
    }
}
