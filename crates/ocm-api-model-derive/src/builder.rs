use darling::{FromDeriveInput, FromField, ast::Data};
use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};
use syn::{
    Attribute, DeriveInput, GenericArgument, Generics, Path, PathArguments, Type, Visibility,
    parse_quote,
};

/// The name of the flag field which marks top-level resources as links.
const LINK_FIELD: &str = "link";

#[derive(FromDeriveInput)]
#[darling(attributes(builder), supports(struct_named))]
struct BuilderInput {
    ident: Ident,
    vis: Visibility,
    generics: Generics,
    data: Data<(), BuilderField>,
    #[darling(default)]
    kind: Option<String>,
}

#[derive(FromField)]
#[darling(forward_attrs(doc))]
struct BuilderField {
    ident: Option<Ident>,
    ty: Type,
    attrs: Vec<Attribute>,
}

/// A field of the value type, classified by how the builder treats it.
struct Attr<'a> {
    ident: &'a Ident,
    ty: &'a Type,
    inner: &'a Type,
    docs: &'a [Attribute],
}

/// Returns `T` if `ty` is spelled `Option<T>` (optionally with a leading path).
fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let segment = type_path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first() {
        Some(GenericArgument::Type(inner)) if args.args.len() == 1 => Some(inner),
        _ => None,
    }
}

pub fn derive(input: DeriveInput) -> TokenStream {
    let BuilderInput {
        ident,
        vis,
        generics,
        data,
        kind,
    } = match BuilderInput::from_derive_input(&input) {
        Ok(input) => input,
        Err(err) => return err.write_errors(),
    };

    if !generics.params.is_empty() {
        return syn::Error::new_spanned(&generics, "`#[derive(Builder)]` does not support generics")
            .to_compile_error();
    }

    let fields = match data {
        Data::Struct(fields) => fields.fields,
        Data::Enum(_) => {
            return quote! {
                compile_error!("`#[derive(Builder)]` does not support enums");
            };
        }
    };

    let mut has_link = false;
    let mut attrs = Vec::with_capacity(fields.len());
    for field in &fields {
        let Some(field_ident) = field.ident.as_ref() else {
            continue;
        };
        if kind.is_some() && field_ident == LINK_FIELD {
            has_link = true;
            continue;
        }
        let Some(inner) = option_inner(&field.ty) else {
            return syn::Error::new_spanned(
                &field.ty,
                "`#[derive(Builder)]` requires every attribute to be an `Option`",
            )
            .to_compile_error();
        };
        attrs.push(Attr {
            ident: field_ident,
            ty: &field.ty,
            inner,
            docs: &field.attrs,
        });
    }

    if let Some(kind) = &kind {
        let has = |name: &str| attrs.iter().any(|attr| attr.ident == name);
        if !has_link || !has("id") || !has("href") {
            let message = format!(
                "resources of kind {kind:?} must declare `link: bool`, `id: Option<String>` and `href: Option<String>`"
            );
            return syn::Error::new_spanned(&ident, message).to_compile_error();
        }
    }

    let model: Path = parse_quote!(::ocm_api_model);
    let builder_ident = format_ident!("{ident}Builder", ident = ident);
    let buildable = quote! { #model::builder::Buildable };
    let ident_name = ident.to_string();

    let builder_fields = attrs
        .iter()
        .map(|Attr { ident, inner, .. }| {
            quote! {
                #ident: ::core::option::Option<<#inner as #buildable>::Builder>,
            }
        })
        .collect::<TokenStream>();

    let setters = attrs
        .iter()
        .map(
            |Attr {
                 ident, inner, docs, ..
             }| {
                let docs = docs.iter();
                quote! {
                    #(#docs)*
                    pub fn #ident(
                        mut self,
                        value: impl ::core::convert::Into<<#inner as #buildable>::Builder>,
                    ) -> Self {
                        self.#ident = ::core::option::Option::Some(value.into());
                        self
                    }
                }
            },
        )
        .collect::<TokenStream>();

    let unset_checks = attrs.iter().map(|Attr { ident, .. }| {
        quote! { && self.#ident.is_none() }
    });
    let all_unset = quote! { true #(#unset_checks)* };

    let from_builder_fields = attrs
        .iter()
        .map(|Attr { ident, ty, .. }| {
            let name = ident.to_string();
            quote! {
                #ident: <#ty as #buildable>::from_builder(&builder.#ident, &context.field(#name))?,
            }
        })
        .collect::<TokenStream>();

    let to_builder_fields = attrs
        .iter()
        .map(|Attr { ident, ty, .. }| {
            quote! {
                #ident: <#ty as #buildable>::to_builder(&self.#ident),
            }
        })
        .collect::<TokenStream>();

    let link = kind.is_some().then(|| format_ident!("{}", LINK_FIELD));
    let link_builder_field = link.as_ref().map(|link| quote! { #link: bool, });
    let link_setter = link.as_ref().map(|link| {
        quote! {
            /// Marks the object as a link: a reference which only carries `id` and `href` and
            /// needs to be fetched separately.
            pub fn #link(mut self, value: bool) -> Self {
                self.#link = value;
                self
            }
        }
    });
    let link_from_builder = link.as_ref().map(|link| quote! { #link: builder.#link, });
    let link_to_builder = link.as_ref().map(|link| quote! { #link: self.#link, });

    let resource_impl = kind.as_ref().map(|kind| {
        let link_kind = format!("{kind}Link");
        let nil_kind = format!("{kind}Nil");
        let list_kind = format!("{kind}List");
        let list_link_kind = format!("{kind}ListLink");
        let list_nil_kind = format!("{kind}ListNil");
        quote! {
            impl #model::kind::Resource for #ident {
                const KIND: &'static str = #kind;
                const LINK_KIND: &'static str = #link_kind;
                const NIL_KIND: &'static str = #nil_kind;
                const LIST_KIND: &'static str = #list_kind;
                const LIST_LINK_KIND: &'static str = #list_link_kind;
                const LIST_NIL_KIND: &'static str = #list_nil_kind;

                fn is_link(&self) -> bool {
                    self.link
                }

                fn id(&self) -> ::core::option::Option<&str> {
                    self.id.as_deref()
                }

                fn href(&self) -> ::core::option::Option<&str> {
                    self.href.as_deref()
                }
            }
        }
    });

    let builder_doc = format!("Builder for [`{ident_name}`] objects.");

    quote! {
        #[doc = #builder_doc]
        #[derive(Clone, Debug, Default, PartialEq)]
        #vis struct #builder_ident {
            #link_builder_field
            #builder_fields
        }

        impl #builder_ident {
            pub fn new() -> Self {
                <Self as ::core::default::Default>::default()
            }

            #link_setter
            #setters

            /// Returns `true` if no attribute (other than the link flag) has been set.
            pub fn is_empty(&self) -> bool {
                #all_unset
            }

            /// Resets the builder so that it mirrors `object`.
            pub fn copy(mut self, object: &#ident) -> Self {
                self.clone_from(&<#ident as #buildable>::to_builder(object));
                self
            }

            /// Builds a new object, failing with the first error reported by a nested builder.
            pub fn build(&self) -> ::core::result::Result<#ident, #model::builder::BuildError> {
                #model::builder::build::<#ident>(self, #ident_name)
            }
        }

        impl ::core::convert::From<&#ident> for #builder_ident {
            fn from(object: &#ident) -> Self {
                <#ident as #buildable>::to_builder(object)
            }
        }

        impl #ident {
            pub fn builder() -> #builder_ident {
                #builder_ident::new()
            }

            pub fn to_builder(&self) -> #builder_ident {
                <Self as #buildable>::to_builder(self)
            }

            /// Returns `true` if no attribute (other than the link flag) has a value.
            pub fn is_empty(&self) -> bool {
                #all_unset
            }
        }

        impl #buildable for #ident {
            type Builder = #builder_ident;

            fn from_builder(
                builder: &Self::Builder,
                context: &#model::builder::BuildContext<'_>,
            ) -> ::core::result::Result<Self, #model::builder::BuildError> {
                ::core::result::Result::Ok(Self {
                    #link_from_builder
                    #from_builder_fields
                })
            }

            fn to_builder(&self) -> Self::Builder {
                #builder_ident {
                    #link_to_builder
                    #to_builder_fields
                }
            }
        }

        #resource_impl
    }
}
