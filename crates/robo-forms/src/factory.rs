//! Field factory
//!
//! Turns a form's field tags, in document order, into [`Field`]s. A first
//! pass plans which tags make up which field (radio/checkbox inputs absorb
//! every later input of the same type and name); a second pass builds the
//! fields. The tag slice itself is never reordered.

use crate::error::FormResult;
use crate::field::{
    CheckboxGroup, Field, FileField, InputField, InputType, MultiSelectField, RadioGroup,
    SelectField, SubmitControl, TextareaField, control_name,
};
use crate::tag::{TagRef, TagSnapshot};

/// A field plus the tag(s) it was built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltField {
    pub field: Field,
    pub tags: Vec<TagSnapshot>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKind {
    Input(InputType),
    Textarea,
    Select,
    MultiSelect,
    Button,
}

/// Which tags (by index) form one field
#[derive(Debug)]
struct FieldPlan {
    kind: FieldKind,
    indices: Vec<usize>,
}

/// Build every field for `tags`
pub fn build_fields(tags: &[TagRef<'_>]) -> FormResult<Vec<BuiltField>> {
    let plans = plan_fields(tags)?;
    Ok(plans
        .into_iter()
        .map(|plan| {
            let group: Vec<TagRef<'_>> = plan.indices.iter().map(|&i| tags[i]).collect();
            BuiltField {
                field: build_field(plan.kind, &group),
                tags: group.iter().map(TagRef::snapshot).collect(),
            }
        })
        .collect())
}

fn plan_fields(tags: &[TagRef<'_>]) -> FormResult<Vec<FieldPlan>> {
    let mut consumed = vec![false; tags.len()];
    let mut plans = Vec::new();

    for (i, tag) in tags.iter().enumerate() {
        if consumed[i] {
            continue;
        }
        consumed[i] = true;

        let kind = match tag.name() {
            "input" => FieldKind::Input(InputType::parse(tag.attr("type"))?),
            "textarea" | "select" | "button" if control_name(tag).is_none() => {
                tracing::debug!("Skipping unnamed <{}>", tag.name());
                continue;
            }
            "textarea" => FieldKind::Textarea,
            "select" if tag.has_attr("multiple") => FieldKind::MultiSelect,
            "select" => FieldKind::Select,
            "button" => FieldKind::Button,
            _ => continue,
        };

        let mut indices = vec![i];
        if let FieldKind::Input(ty) = kind {
            if let Some(name) = group_name(tag, ty) {
                for (j, other) in tags.iter().enumerate().skip(i + 1) {
                    if !consumed[j] && group_name(other, ty).as_deref() == Some(name.as_str()) {
                        consumed[j] = true;
                        indices.push(j);
                    }
                }
            }
        }
        plans.push(FieldPlan { kind, indices });
    }

    Ok(plans)
}

/// Lowercased name of a named radio/checkbox input of type `ty`
fn group_name(tag: &TagRef<'_>, ty: InputType) -> Option<String> {
    if !ty.is_grouped() || !tag.is("input") {
        return None;
    }
    if InputType::parse(tag.attr("type")).ok() != Some(ty) {
        return None;
    }
    control_name(tag).map(|name| name.to_lowercase())
}

fn build_field(kind: FieldKind, group: &[TagRef<'_>]) -> Field {
    let tag = &group[0];
    match kind {
        FieldKind::Input(InputType::Radio) => Field::Radio(RadioGroup::from_tags(group)),
        FieldKind::Input(InputType::Checkbox) => Field::Checkbox(CheckboxGroup::from_tags(group)),
        FieldKind::Input(InputType::File) => Field::File(FileField::from_tag(tag)),
        FieldKind::Input(ty) if ty.is_button() => Field::Submit(SubmitControl::from_input(tag, ty)),
        FieldKind::Input(ty) => Field::Input(InputField::from_tag(tag, ty)),
        FieldKind::Textarea => Field::Textarea(TextareaField::from_tag(tag)),
        FieldKind::Select => Field::Select(SelectField::from_tag(tag)),
        FieldKind::MultiSelect => Field::MultiSelect(MultiSelectField::from_tag(tag)),
        FieldKind::Button => Field::Submit(SubmitControl::from_button(tag)),
    }
}
