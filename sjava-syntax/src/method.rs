use std::collections::HashMap;

use serde::Serialize;
use sjava_core::{Error, Result, VarType, is_identifier, is_method_name};

use crate::classifier::method_header_parts;
use crate::cursor::Cursor;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub ty: VarType,
    pub is_final: bool,
}

impl Parameter {
    /// Parses `[final] Type name`. Default values are not allowed.
    pub fn parse(text: &str) -> Option<Self> {
        let mut cursor = Cursor::new(text.trim());
        let is_final = cursor.eat_word("final");
        if is_final && !cursor.skip_space() {
            return None;
        }

        let ty = cursor.eat_name().and_then(VarType::from_keyword)?;
        if !cursor.skip_space() {
            return None;
        }

        let name = cursor.rest();
        is_identifier(name).then(|| Parameter {
            name: name.into(),
            ty,
            is_final,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSignature {
    pub name: String,
    pub params: Vec<Parameter>,
    /// Body lines after the header, ending with the method's closing brace.
    pub body: Vec<String>,
}

impl MethodSignature {
    /// Builds a signature from a method header line and its buffered body.
    pub fn from_header(header: &str, body: Vec<String>) -> Result<Self> {
        let (name, params_text) =
            method_header_parts(header).ok_or_else(|| Error::MalformedMethodHeader {
                line: header.into(),
            })?;

        if !is_method_name(name) {
            return Err(Error::InvalidMethodName { name: name.into() });
        }

        let params = parse_params(name, params_text)?;

        Ok(Self {
            name: name.into(),
            params,
            body,
        })
    }
}

fn parse_params(method: &str, text: &str) -> Result<Vec<Parameter>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    // a trailing comma yields an empty item, which is rejected like any other bad parameter
    text.split(',')
        .map(|param| {
            Parameter::parse(param).ok_or_else(|| Error::InvalidParameter {
                method: method.into(),
                param: param.trim().into(),
            })
        })
        .collect()
}

/// Every method of a program keyed by name, kept in source order.
#[derive(Debug, Default, Clone)]
pub struct MethodTable {
    inner: Vec<MethodSignature>,
    name_map: HashMap<String, usize>,
}

impl MethodTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, method: MethodSignature) -> Result<()> {
        if self.name_map.contains_key(&method.name) {
            return Err(Error::DuplicateMethod { name: method.name });
        }

        self.name_map.insert(method.name.clone(), self.inner.len());
        self.inner.push(method);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.name_map.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&MethodSignature> {
        self.name_map.get(name).map(|index| &self.inner[*index])
    }

    pub fn iter(&self) -> impl Iterator<Item = &MethodSignature> {
        self.inner.iter()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
