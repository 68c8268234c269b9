use crate::page::PageRole;

/// Quantity `<input type="number">` next to a listing checkbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantityInput {
    pub disabled: bool,
    pub value: Option<u32>,
}

impl Default for QuantityInput {
    fn default() -> Self { Self { disabled: true, value: None } }
}

impl QuantityInput {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 100;

    /// Checkbox click: checked enables with a quantity of 1, unchecked disables and clears.
    pub fn toggle(&mut self, checked: bool) {
        if checked {
            self.disabled = false;
            self.value = Some(Self::MIN);
        } else {
            self.disabled = true;
            self.value = None;
        }
    }
}

/// Click handlers attached to a rendered page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Listeners {
    /// Delegated checkbox handler on the `.products` container.
    pub quantity_toggle: bool,
    /// Print handler on `#print_quote`.
    pub print_quote: bool,
}

impl Listeners {
    pub fn for_page(role: PageRole, has_print_trigger: bool) -> Self {
        match role {
            PageRole::Listing => Self { quantity_toggle: true, print_quote: false },
            PageRole::Quote => Self { quantity_toggle: false, print_quote: has_print_trigger },
            PageRole::Neither => Self::default(),
        }
    }

    pub fn is_empty(&self) -> bool { !self.quantity_toggle && !self.print_quote }

    /// Inline script wiring the handlers; empty when there is nothing to attach.
    pub fn script(&self) -> String {
        if self.is_empty() {
            return String::new();
        }
        let mut js = String::from("<script>\n\"use strict\";\n");
        if self.quantity_toggle {
            js.push_str(&quantity_toggle_js());
        }
        if self.print_quote {
            js.push_str(PRINT_QUOTE_JS);
        }
        js.push_str("</script>");
        js
    }
}

/// Browser side of [`QuantityInput::toggle`].
fn quantity_toggle_js() -> String {
    format!(
        r#"document.querySelector(".products").addEventListener("click", function (event) {{
  if (event.target.type !== "checkbox") {{ return; }}
  var input = event.target.parentElement.parentElement.querySelector("input[type=number]");
  if (event.target.checked === true) {{
    input.disabled = false;
    input.value = {checked_value};
  }} else {{
    input.disabled = true;
    input.value = null;
  }}
}});
"#,
        checked_value = QuantityInput::MIN,
    )
}

const PRINT_QUOTE_JS: &str = r#"document.getElementById("print_quote").addEventListener("click", function () {
  window.print();
});
"#;
