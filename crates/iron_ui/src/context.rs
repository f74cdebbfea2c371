//! Builder context for constructing widget trees

use std::time::Duration;

use crate::element::Element;
use crate::stabilizer::WidthPolicy;
use crate::widgets::{Accordion, Column, LoadSignal, Row, Section, Text};

/// Context for building widget trees using a closure-based API
///
/// View functions receive one and push children into it.
pub struct Context<M> {
    children: Vec<Element<M>>,
}

impl<M: 'static> Context<M> {
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
        }
    }

    /// Add a text widget
    pub fn text(&mut self, content: impl Into<String>) -> &mut Self {
        self.children.push(Element::new(Text::new(content)));
        self
    }

    /// Add a text widget with custom size
    pub fn text_sized(&mut self, content: impl Into<String>, size: f32) -> &mut Self {
        self.children.push(Element::new(Text::new(content).size(size)));
        self
    }

    /// Start an accordion; finish it with [`AccordionBuilder::build`].
    pub fn accordion(
        &mut self,
        sections: Vec<Section<M>>,
        animation_time: Duration,
    ) -> AccordionBuilder<'_, M> {
        AccordionBuilder {
            ctx: self,
            accordion: Accordion::new(sections, animation_time),
        }
    }

    /// Add a custom element directly
    pub fn add(&mut self, element: Element<M>) -> &mut Self {
        self.children.push(element);
        self
    }

    /// Take the built children
    pub fn take(self) -> Vec<Element<M>> {
        self.children
    }
}

impl<M: 'static> Default for Context<M> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for accordion widgets
pub struct AccordionBuilder<'a, M> {
    ctx: &'a mut Context<M>,
    accordion: Accordion<M>,
}

impl<'a, M: 'static> AccordionBuilder<'a, M> {
    pub fn loaded(mut self, loaded: impl Into<LoadSignal>) -> Self {
        self.accordion = self.accordion.loaded(loaded);
        self
    }

    pub fn width_policy(mut self, policy: WidthPolicy) -> Self {
        self.accordion = self.accordion.width_policy(policy);
        self
    }

    /// Finish building
    pub fn build(self) -> &'a mut Context<M> {
        self.ctx.children.push(Element::new(self.accordion));
        self.ctx
    }
}

/// Build a column from a closure
pub fn col<M: 'static>(builder: impl FnOnce(&mut Context<M>)) -> Element<M> {
    let mut ctx = Context::new();
    builder(&mut ctx);
    Element::new(Column::new(ctx.take()))
}

/// Build a row from a closure
pub fn row<M: 'static>(builder: impl FnOnce(&mut Context<M>)) -> Element<M> {
    let mut ctx = Context::new();
    builder(&mut ctx);
    Element::new(Row::new(ctx.take()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Size;

    #[test]
    fn test_col_stacks_children() {
        let mut el: Element<()> = col(|c| {
            c.text("Coach notes");
            c.text("Athlete notes");
        });
        let size = el.layout(Size::new(500.0, f32::INFINITY));
        // two 14px lines with default spacing
        assert!((size.height - (2.0 * 14.0 * 1.2 + 8.0)).abs() < 1e-3);
    }

    #[test]
    fn test_accordion_builder_pushes_one_element() {
        let mut ctx: Context<()> = Context::new();
        ctx.accordion(
            vec![Section::new("Week 1", Element::new(Text::new("rest")))],
            Duration::from_millis(200),
        )
        .loaded(true)
        .build()
        .text("footer");
        let mut children = ctx.take();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].disclosures_mut().len(), 1);
    }

    #[test]
    fn test_row_places_children_side_by_side() {
        let mut el: Element<()> = row(|r| {
            r.text_sized("Squat", 10.0);
            r.text_sized("3/5", 10.0);
        });
        let size = el.layout(Size::UNBOUNDED);
        // 30 + 8 + 18
        assert!((size.width - 56.0).abs() < 1e-3);
    }
}
