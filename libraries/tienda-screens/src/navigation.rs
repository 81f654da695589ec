//! Route and navigation mapping.

use std::fmt;

/// A navigable destination.
///
/// Paths mirror the route names the client has always used; the edit route
/// carries the product id as its parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Home,
    AddProduct,
    EditProduct { product_id: i64 },
}

impl Route {
    /// Render the route as its path string.
    pub fn path(&self) -> String {
        match self {
            Route::Login => "login".to_string(),
            Route::Register => "register".to_string(),
            Route::Home => "home".to_string(),
            Route::AddProduct => "add_product".to_string(),
            Route::EditProduct { product_id } => format!("edit_product/{product_id}"),
        }
    }

    /// Parse a path string back into a route.
    pub fn parse(path: &str) -> Option<Route> {
        match path {
            "login" => Some(Route::Login),
            "register" => Some(Route::Register),
            "home" => Some(Route::Home),
            "add_product" => Some(Route::AddProduct),
            _ => {
                let product_id = path.strip_prefix("edit_product/")?.parse().ok()?;
                Some(Route::EditProduct { product_id })
            }
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Route stack. The start destination is the login screen.
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            stack: vec![Route::Login],
        }
    }

    /// The route currently on top of the stack.
    pub fn current(&self) -> &Route {
        // The stack is never empty: navigate_up refuses to pop the root.
        self.stack.last().expect("navigation stack is never empty")
    }

    /// Push a route onto the stack.
    pub fn navigate(&mut self, route: Route) {
        self.stack.push(route);
    }

    /// Pop back to the previous route. Returns false at the root.
    pub fn navigate_up(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    /// Replace the whole stack with a single route (post-submit navigation).
    pub fn reset_to(&mut self, route: Route) {
        self.stack.clear();
        self.stack.push(route);
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
