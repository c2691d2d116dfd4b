use log::{debug, error, warn};

use crate::api::FieldName;
use crate::client::Predictor;
use crate::currency::{CurrencyFormat, ES_CO_USD};
use crate::error::PREDICTION_FAILED;
use crate::form::{FieldSpec, Form, DEFAULT_FIELDS};
use crate::reveal::{Intersection, RevealObserver, HIDDEN, SHOWN};
use crate::validation::{validate_input, FieldStyle};
use crate::view::{error_markup, prediction_markup, ButtonState, Element, View};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SubmitOutcome {
    Rendered(f64),
    Failed,
    /// The button was still busy from an earlier submission that never settled.
    Ignored,
}

/// Drives one prediction form: submit, render, reset, per-field feedback
/// and the fade-in of its containers.
pub struct FormController {
    predictor: Box<dyn Predictor + Send + Sync>,
    view: Box<dyn View + Send>,
    fields: Vec<FieldSpec>,
    form: Form,
    button: ButtonState,
    reveal: RevealObserver,
    currency: CurrencyFormat,
}
impl FormController {
    pub fn new(predictor: Box<dyn Predictor + Send + Sync>, view: Box<dyn View + Send>) -> Self {
        Self {
            predictor,
            view,
            fields: DEFAULT_FIELDS.to_vec(),
            form: Form::new(),
            button: ButtonState::Idle,
            reveal: RevealObserver::new(),
            currency: ES_CO_USD,
        }
    }
    pub fn with_fields(mut self, fields: Vec<FieldSpec>) -> Self {
        self.fields = fields;
        self
    }
    pub fn with_currency(mut self, currency: CurrencyFormat) -> Self {
        self.currency = currency;
        self
    }
    pub fn button(&self) -> ButtonState {
        self.button
    }
    pub fn form(&self) -> &Form {
        &self.form
    }
    pub fn spec(&self, field: FieldName) -> Option<&FieldSpec> {
        self.fields.iter().find(|spec| spec.name == field)
    }
    /// Hides both containers and starts watching them.
    pub fn on_load(&mut self) {
        for element in [Element::FormContainer, Element::ResultContainer] {
            self.view.set_reveal_style(element, HIDDEN);
            self.reveal.observe(element);
        }
        self.view.set_button(self.button);
    }
    pub fn on_intersection(&mut self, entries: &[Intersection]) {
        for element in self.reveal.on_intersection(entries) {
            self.view.set_reveal_style(element, SHOWN);
        }
    }
    pub fn is_watching(&self, element: Element) -> bool {
        self.reveal.is_observing(element)
    }
    /// Stores the new text and restyles the input. Never blocks a submit.
    pub fn on_input(&mut self, field: FieldName, value: &str) -> FieldStyle {
        self.form.set(field, value);
        let style = match self.spec(field) {
            Some(spec) => validate_input(spec, value),
            None => FieldStyle::Valid,
        };
        self.view.set_field_style(field, style);
        style
    }
    pub async fn on_submit(&mut self) -> SubmitOutcome {
        if self.button == ButtonState::Busy {
            debug!("Submit ignored, a prediction is still pending");
            return SubmitOutcome::Ignored;
        }
        self.set_button(ButtonState::Busy);
        let outcome = self.predict_and_render().await;
        self.set_button(ButtonState::Idle);
        outcome
    }
    async fn predict_and_render(&mut self) -> SubmitOutcome {
        let request = match self.form.to_request() {
            Ok(request) => request,
            Err(e) => {
                warn!("Not sending prediction request: {}", e);
                self.show_error(PREDICTION_FAILED);
                return SubmitOutcome::Failed;
            }
        };
        let result = self.predictor.predict_price(&request).await;
        match result {
            Ok(price) => {
                if self.show_prediction(price) {
                    SubmitOutcome::Rendered(price)
                } else {
                    SubmitOutcome::Failed
                }
            }
            Err(e) => {
                if e.is_malformed() {
                    warn!("Error: {}", e);
                } else {
                    error!("Error: {}", e);
                }
                self.show_error(PREDICTION_FAILED);
                SubmitOutcome::Failed
            }
        }
    }
    /// Renders the price, or the error block if it can't be formatted.
    pub fn show_prediction(&mut self, price: f64) -> bool {
        match self.currency.format(price) {
            Some(formatted) => {
                debug!("Prediction {} rendered as {}", price, formatted);
                self.show_result(prediction_markup(&formatted));
                true
            }
            None => {
                error!("Can't format prediction {}", price);
                self.show_error(PREDICTION_FAILED);
                false
            }
        }
    }
    pub fn show_error(&mut self, message: &str) {
        self.show_result(error_markup(message));
    }
    pub fn reset_form(&mut self) {
        self.form.reset();
        self.view.clear_fields();
        self.view.set_result_visible(false);
        self.view.scroll_into_view(Element::FormContainer);
    }
    fn show_result(&mut self, markup: String) {
        self.view.set_result_markup(markup);
        self.view.set_result_visible(true);
        self.view.scroll_into_view(Element::ResultContainer);
    }
    fn set_button(&mut self, state: ButtonState) {
        debug!("Submit button {} -> {}", self.button, state);
        self.button = state;
        self.view.set_button(state);
    }
}
