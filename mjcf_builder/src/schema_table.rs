//! Generated from the MuJoCo XML reference. Do not edit by hand.

use crate::schema::{AttributeSpec, ElementSchema, Namespace};

const fn value(name: &'static str, default: &'static str) -> AttributeSpec {
    AttributeSpec::value(name, default)
}

const fn absent(name: &'static str) -> AttributeSpec {
    AttributeSpec::absent(name)
}

const fn required(name: &'static str) -> AttributeSpec {
    AttributeSpec::required(name)
}

pub(crate) static SCHEMAS: &[ElementSchema] = &[
    ElementSchema {
        namespace: Namespace::Elements,
        type_name: "Include",
        tag: "include",
        attributes: &[
            required("file"),
        ],
    },
    ElementSchema {
        namespace: Namespace::Elements,
        type_name: "Mujoco",
        tag: "mujoco",
        attributes: &[
            value("model", "MuJoCo Model"),
        ],
    },
    ElementSchema {
        namespace: Namespace::Elements,
        type_name: "Compiler",
        tag: "compiler",
        attributes: &[
            value("angle", "degree"),
            value("balanceinertia", "false"),
            absent("boundinertia"),
            absent("boundmass"),
            value("convexhull", "true"),
            value("coordinate", "local"),
            value("discardvisual", "false"),
            value("eulerseq", "xyz"),
            value("fitaabb", "false"),
            value("inertiafromgeom", "auto"),
            value("inertiagrouprange", "0 4"),
            absent("meshdir"),
            absent("settotalmass"),
            value("strippath", "false"),
            absent("texturedir"),
        ],
    },
    ElementSchema {
        namespace: Namespace::Elements,
        type_name: "Option",
        tag: "option",
        attributes: &[
            absent("apirate"),
            value("collision", "all"),
            value("cone", "pyramidal"),
            absent("density"),
            value("gravity", "0.0 0.0 -9.81"),
            value("impedance", "sigmoid"),
            absent("impratio"),
            value("integrator", "Euler"),
            absent("iterations"),
            value("jacobian", "auto"),
            absent("mpr_iterations"),
            absent("mpr_tolerance"),
            absent("noslip_iterations"),
            absent("noslip_tolerance"),
            absent("o_margin"),
            value("o_solimp", "0.8 0.8 0.01"),
            value("o_solref", "0.02 1.0"),
            value("reference", "spring"),
            value("solver", "Newton"),
            absent("timestep"),
            absent("tolerance"),
            absent("viscosity"),
            value("wind", "0.0 0.0 0.0"),
        ],
    },
    ElementSchema {
        namespace: Namespace::Elements,
        type_name: "OptionFlag",
        tag: "optionflag",
        attributes: &[
            value("actuation", "enable"),
            value("clampctrl", "enable"),
            value("constraint", "enable"),
            value("contact", "enable"),
            value("energy", "disable"),
            value("equality", "enable"),
            value("filterparent", "enable"),
            value("frictionloss", "enable"),
            value("fwdinv", "disable"),
            value("gravity", "enable"),
            value("limit", "enable"),
            value("override", "disable"),
            value("passive", "enable"),
            value("refsafe", "enable"),
            value("sensornoise", "disable"),
            value("warmstart", "enable"),
        ],
    },
    ElementSchema {
        namespace: Namespace::Elements,
        type_name: "Size",
        tag: "size",
        attributes: &[
            absent("nconmax"),
            absent("njmax"),
            absent("nkey"),
            absent("nstack"),
            absent("nuser_actuator"),
            absent("nuser_body"),
            absent("nuser_cam"),
            absent("nuser_geom"),
            absent("nuser_jnt"),
            absent("nuser_sensor"),
            absent("nuser_site"),
            absent("nuser_tendon"),
            absent("nuserdata"),
        ],
    },
    ElementSchema {
        namespace: Namespace::Elements,
        type_name: "Visual",
        tag: "visual",
        attributes: &[],
    },
    ElementSchema {
        namespace: Namespace::Elements,
        type_name: "Statistic",
        tag: "statistic",
        attributes: &[
            absent("center"),
            absent("extent"),
            absent("meaninertia"),
            absent("meanmass"),
            absent("meansize"),
        ],
    },
    ElementSchema {
        namespace: Namespace::Elements,
        type_name: "Default",
        tag: "default",
        attributes: &[
            absent("class_"),
        ],
    },
    ElementSchema {
        namespace: Namespace::Elements,
        type_name: "Custom",
        tag: "custom",
        attributes: &[],
    },
    ElementSchema {
        namespace: Namespace::Elements,
        type_name: "Numeric",
        tag: "numeric",
        attributes: &[
            required("name"),
            value("data", "0 0 ..."),
            absent("size"),
        ],
    },
    ElementSchema {
        namespace: Namespace::Elements,
        type_name: "Text",
        tag: "text",
        attributes: &[
            required("data"),
            required("name"),
        ],
    },
    ElementSchema {
        namespace: Namespace::Elements,
        type_name: "Tuple",
        tag: "tuple",
        attributes: &[
            required("name"),
        ],
    },
    ElementSchema {
        namespace: Namespace::Elements,
        type_name: "Tupleelement",
        tag: "tupleelement",
        attributes: &[
            required("objname"),
            required("objtype"),
            absent("prm"),
        ],
    },
    ElementSchema {
        namespace: Namespace::Elements,
        type_name: "Asset",
        tag: "asset",
        attributes: &[],
    },
    ElementSchema {
        namespace: Namespace::Elements,
        type_name: "Texture",
        tag: "texture",
        attributes: &[
            value("builtin", "none"),
            absent("file"),
            absent("fileback"),
            absent("filedown"),
            absent("filefront"),
            absent("fileleft"),
            absent("fileright"),
            absent("fileup"),
            absent("gridlayout"),
            value("gridsize", "1 1"),
            absent("height"),
            value("mark", "none"),
            value("markrgb", "0.0 0.0 0.0"),
            absent("name"),
            absent("random"),
            value("rgb1", "0.8 0.8 0.8"),
            value("rgb2", "0.5 0.5 0.5"),
            value("type", "cube"),
            absent("width"),
        ],
    },
    ElementSchema {
        namespace: Namespace::Elements,
        type_name: "Hfield",
        tag: "hfield",
        attributes: &[
            required("size"),
            absent("file"),
            absent("name"),
            absent("ncol"),
            absent("nrow"),
        ],
    },
    ElementSchema {
        namespace: Namespace::Elements,
        type_name: "Mesh",
        tag: "mesh",
        attributes: &[
            required("file"),
            absent("class_"),
            absent("name"),
            value("scale", "1.0 1.0 1.0"),
        ],
    },
    ElementSchema {
        namespace: Namespace::Elements,
        type_name: "Material",
        tag: "material",
        attributes: &[
            required("name"),
            absent("class_"),
            absent("emission"),
            absent("reflectance"),
            value("rgba", "1.0 1.0 1.0 1.0"),
            absent("shininess"),
            absent("specular"),
            value("texrepeat", "1.0 1.0"),
            absent("texture"),
            value("texuniform", "false"),
        ],
    },
    ElementSchema {
        namespace: Namespace::Elements,
        type_name: "Body",
        tag: "body",
        attributes: &[
            absent("childclass"),
            value("mocap", "false"),
            absent("name"),
            absent("pos"),
            value("user", "0 0 ..."),
            absent("axisangle"),
            absent("euler"),
            value("quat", "1 0 0 0"),
            absent("xyaxes"),
            absent("zaxis"),
        ],
    },
    ElementSchema {
        namespace: Namespace::Elements,
        type_name: "Inertial",
        tag: "inertial",
        attributes: &[
            required("mass"),
            required("pos"),
            absent("diaginertia"),
            absent("fullinertia"),
            absent("axisangle"),
            absent("euler"),
            value("quat", "1 0 0 0"),
            absent("xyaxes"),
            absent("zaxis"),
        ],
    },
    ElementSchema {
        namespace: Namespace::Elements,
        type_name: "Joint",
        tag: "joint",
        attributes: &[
            absent("armature"),
            value("axis", "0.0 0.0 1.0"),
            absent("class_"),
            absent("damping"),
            absent("frictionloss"),
            value("limited", "false"),
            absent("margin"),
            absent("name"),
            value("pos", "0.0 0.0 0.0"),
            value("range", "0.0 0.0"),
            absent("ref"),
            value("springdamper", "0.0 0.0"),
            absent("springref"),
            absent("stiffness"),
            value("type", "hinge"),
            value("user", "0 0 ..."),
            absent("solimpfriction"),
            absent("solimplimit"),
            absent("solreffriction"),
            absent("solreflimit"),
        ],
    },
    ElementSchema {
        namespace: Namespace::Elements,
        type_name: "Freejoint",
        tag: "freejoint",
        attributes: &[
            absent("name"),
        ],
    },
    ElementSchema {
        namespace: Namespace::Elements,
        type_name: "Geom",
        tag: "geom",
        attributes: &[
            absent("class_"),
            absent("conaffinity"),
            absent("condim"),
            absent("contype"),
            absent("density"),
            absent("fitscale"),
            value("friction", "1.0 0.005 0.0001"),
            absent("fromto"),
            absent("gap"),
            absent("group"),
            absent("hfield"),
            absent("margin"),
            absent("mass"),
            absent("material"),
            absent("mesh"),
            absent("name"),
            value("pos", "0.0 0.0 0.0"),
            value("rgba", "0.5 0.5 0.5 1.0"),
            value("size", "0.0 0.0 0.0"),
            absent("solmix"),
            value("type", "sphere"),
            value("user", "0 0 ..."),
            absent("axisangle"),
            absent("euler"),
            value("quat", "1 0 0 0"),
            value("solimp", "0.9 0.95 0.001"),
            value("solref", "0.02 1"),
            absent("xyaxes"),
            absent("zaxis"),
        ],
    },
    ElementSchema {
        namespace: Namespace::Elements,
        type_name: "Site",
        tag: "site",
        attributes: &[
            absent("class_"),
            absent("group"),
            absent("material"),
            absent("name"),
            value("pos", "0.0 0.0 0.0"),
            value("rgba", "0.5 0.5 0.5 1.0"),
            value("size", "0.0 0.0 0.0"),
            value("type", "sphere"),
            value("user", "0 0 ..."),
            absent("axisangle"),
            absent("euler"),
            value("quat", "1 0 0 0"),
            absent("xyaxes"),
            absent("zaxis"),
        ],
    },
    ElementSchema {
        namespace: Namespace::Elements,
        type_name: "Camera",
        tag: "camera",
        attributes: &[
            absent("class_"),
            absent("fovy"),
            absent("ipd"),
            value("mode", "fixed"),
            absent("name"),
            value("pos", "0.0 0.0 0.0"),
            absent("target"),
            value("user", "0 0 ..."),
            absent("axisangle"),
            absent("euler"),
            value("quat", "1 0 0 0"),
            absent("xyaxes"),
            absent("zaxis"),
        ],
    },
    ElementSchema {
        namespace: Namespace::Elements,
        type_name: "Light",
        tag: "light",
        attributes: &[
            value("active", "true"),
            value("ambient", "0.0 0.0 0.0"),
            value("attenuation", "1.0 0.0 0.0"),
            value("castshadow", "true"),
            absent("class_"),
            absent("cutoff"),
            value("diffuse", "0.7 0.7 0.7"),
            value("dir", "0.0 0.0 -1.0"),
            value("directional", "false"),
            absent("exponent"),
            value("mode", "fixed"),
            absent("name"),
            value("pos", "0.0 0.0 0.0"),
            value("specular", "0.3 0.3 0.3"),
            absent("target"),
        ],
    },
    ElementSchema {
        namespace: Namespace::Elements,
        type_name: "Contact",
        tag: "contact",
        attributes: &[],
    },
    ElementSchema {
        namespace: Namespace::Elements,
        type_name: "Pair",
        tag: "pair",
        attributes: &[
            required("geom1"),
            required("geom2"),
            absent("class_"),
            absent("condim"),
            value("friction", "1.0 1.0 0.005 0.0001 0.0001"),
            absent("gap"),
            absent("margin"),
            value("solimp", "0.9 0.95 0.001"),
            value("solref", "0.02 1"),
        ],
    },
    ElementSchema {
        namespace: Namespace::Elements,
        type_name: "Exclude",
        tag: "exclude",
        attributes: &[
            required("body1"),
            required("body2"),
        ],
    },
    ElementSchema {
        namespace: Namespace::Elements,
        type_name: "Equality",
        tag: "equality",
        attributes: &[],
    },
    ElementSchema {
        namespace: Namespace::Elements,
        type_name: "Tendon",
        tag: "tendon",
        attributes: &[],
    },
    ElementSchema {
        namespace: Namespace::Elements,
        type_name: "Spatial",
        tag: "spatial",
        attributes: &[
            absent("class_"),
            absent("damping"),
            absent("frictionloss"),
            value("limited", "false"),
            absent("margin"),
            absent("material"),
            absent("name"),
            value("range", "0.0 0.0"),
            value("rgba", "0.5 0.5 0.5 1.0"),
            absent("stiffness"),
            value("user", "0 0 ..."),
            absent("width"),
            absent("solimpfriction"),
            absent("solimplimit"),
            absent("solreffriction"),
            absent("solreflimit"),
        ],
    },
    ElementSchema {
        namespace: Namespace::Elements,
        type_name: "Fixed",
        tag: "fixed",
        attributes: &[
            absent("class_"),
            absent("damping"),
            absent("frictionloss"),
            absent("limited"),
            absent("margin"),
            absent("name"),
            absent("range"),
            absent("solimpfriction"),
            absent("solimplimit"),
            absent("solreffriction"),
            absent("solreflimit"),
            absent("stiffness"),
            absent("user"),
        ],
    },
    ElementSchema {
        namespace: Namespace::Elements,
        type_name: "Actuator",
        tag: "actuator",
        attributes: &[],
    },
    ElementSchema {
        namespace: Namespace::Elements,
        type_name: "General",
        tag: "general",
        attributes: &[
            value("biasprm", "0.0 0.0 0.0"),
            value("biastype", "none"),
            absent("class_"),
            absent("cranklength"),
            absent("cranksite"),
            value("ctrllimited", "false"),
            value("ctrlrange", "0.0 0.0"),
            value("dynprm", "1.0 0.0 0.0"),
            value("dyntype", "none"),
            value("forcelimited", "false"),
            value("forcerange", "0.0 0.0"),
            value("gainprm", "1.0 0.0 0.0"),
            value("gaintype", "fixed"),
            value("gear", "1.0 0.0 0.0 0.0 0.0 0.0"),
            absent("joint"),
            absent("jointinparent"),
            absent("name"),
            absent("site"),
            absent("slidersite"),
            absent("tendon"),
            value("user", "0 0 ..."),
        ],
    },
    ElementSchema {
        namespace: Namespace::Elements,
        type_name: "Motor",
        tag: "motor",
        attributes: &[
            absent("class_"),
            absent("cranklength"),
            absent("cranksite"),
            value("ctrllimited", "false"),
            value("ctrlrange", "0.0 0.0"),
            value("forcelimited", "false"),
            value("forcerange", "0.0 0.0"),
            value("gear", "1.0 0.0 0.0 0.0 0.0 0.0"),
            absent("joint"),
            absent("jointinparent"),
            absent("name"),
            absent("site"),
            absent("slidersite"),
            absent("tendon"),
            value("user", "0 0 ..."),
        ],
    },
    ElementSchema {
        namespace: Namespace::Elements,
        type_name: "Position",
        tag: "position",
        attributes: &[
            absent("kp"),
            absent("class_"),
            absent("cranklength"),
            absent("cranksite"),
            absent("ctrllimited"),
            absent("ctrlrange"),
            absent("forcelimited"),
            absent("forcerange"),
            absent("gear"),
            absent("joint"),
            absent("name"),
            absent("slidersite"),
            absent("tendon"),
            absent("user"),
        ],
    },
    ElementSchema {
        namespace: Namespace::Elements,
        type_name: "Velocity",
        tag: "velocity",
        attributes: &[
            absent("kv"),
            absent("class_"),
            absent("cranklength"),
            absent("cranksite"),
            absent("ctrllimited"),
            absent("ctrlrange"),
            absent("forcelimited"),
            absent("forcerange"),
            absent("gear"),
            absent("joint"),
            absent("name"),
            absent("slidersite"),
            absent("tendon"),
            absent("user"),
        ],
    },
    ElementSchema {
        namespace: Namespace::Elements,
        type_name: "Cylinder",
        tag: "cylinder",
        attributes: &[
            absent("area"),
            value("bias", "0.0 0.0 0.0"),
            absent("diameter"),
            absent("timeconst"),
            absent("class_"),
            absent("cranklength"),
            absent("cranksite"),
            absent("ctrllimited"),
            absent("ctrlrange"),
            absent("forcelimited"),
            absent("forcerange"),
            absent("gear"),
            absent("joint"),
            absent("name"),
            absent("slidersite"),
            absent("tendon"),
            absent("user"),
        ],
    },
    ElementSchema {
        namespace: Namespace::Elements,
        type_name: "Muscle",
        tag: "muscle",
        attributes: &[],
    },
    ElementSchema {
        namespace: Namespace::Elements,
        type_name: "Sensor",
        tag: "sensor",
        attributes: &[],
    },
    ElementSchema {
        namespace: Namespace::Elements,
        type_name: "Keyframe",
        tag: "keyframe",
        attributes: &[],
    },
    ElementSchema {
        namespace: Namespace::Elements,
        type_name: "Key",
        tag: "key",
        attributes: &[
            value("act", "0 0 ..."),
            absent("qpos"),
            value("qvel", "0 0 ..."),
            absent("time"),
        ],
    },
    ElementSchema {
        namespace: Namespace::Elements,
        type_name: "Worldbody",
        tag: "worldbody",
        attributes: &[],
    },
    ElementSchema {
        namespace: Namespace::Default,
        type_name: "Mesh",
        tag: "mesh",
        attributes: &[
            absent("file"),
            absent("scale"),
        ],
    },
    ElementSchema {
        namespace: Namespace::Default,
        type_name: "Material",
        tag: "material",
        attributes: &[
            absent("emission"),
            absent("reflectance"),
            absent("rgba"),
            absent("shininess"),
            absent("specular"),
            absent("texrepeat"),
            absent("texture"),
            absent("texuniform"),
        ],
    },
    ElementSchema {
        namespace: Namespace::Default,
        type_name: "Joint",
        tag: "joint",
        attributes: &[
            absent("armature"),
            absent("axis"),
            absent("damping"),
            absent("frictionloss"),
            absent("limited"),
            absent("margin"),
            absent("pos"),
            absent("range"),
            absent("ref"),
            absent("springdamper"),
            absent("springref"),
            absent("stiffness"),
            absent("type"),
            absent("user"),
            absent("solimpfriction"),
            absent("solimplimit"),
            absent("solreffriction"),
            absent("solreflimit"),
        ],
    },
    ElementSchema {
        namespace: Namespace::Default,
        type_name: "Geom",
        tag: "geom",
        attributes: &[
            absent("conaffinity"),
            absent("condim"),
            absent("contype"),
            absent("density"),
            absent("fitscale"),
            absent("friction"),
            absent("fromto"),
            absent("gap"),
            absent("group"),
            absent("hfield"),
            absent("margin"),
            absent("mass"),
            absent("material"),
            absent("mesh"),
            absent("pos"),
            absent("rgba"),
            absent("size"),
            absent("solmix"),
            absent("type"),
            absent("user"),
            absent("axisangle"),
            absent("euler"),
            absent("quat"),
            absent("solimp"),
            absent("solref"),
            absent("xyaxes"),
            absent("zaxis"),
        ],
    },
    ElementSchema {
        namespace: Namespace::Default,
        type_name: "Site",
        tag: "site",
        attributes: &[
            absent("group"),
            absent("material"),
            absent("pos"),
            absent("rgba"),
            absent("size"),
            absent("type"),
            absent("user"),
            absent("axisangle"),
            absent("euler"),
            absent("quat"),
            absent("xyaxes"),
            absent("zaxis"),
        ],
    },
    ElementSchema {
        namespace: Namespace::Default,
        type_name: "Camera",
        tag: "camera",
        attributes: &[
            absent("fovy"),
            absent("ipd"),
            absent("mode"),
            absent("pos"),
            absent("target"),
            absent("user"),
            absent("axisangle"),
            absent("euler"),
            absent("quat"),
            absent("xyaxes"),
            absent("zaxis"),
        ],
    },
    ElementSchema {
        namespace: Namespace::Default,
        type_name: "Light",
        tag: "light",
        attributes: &[
            absent("active"),
            absent("ambient"),
            absent("attenuation"),
            absent("castshadow"),
            absent("cutoff"),
            absent("diffuse"),
            absent("dir"),
            absent("directional"),
            absent("exponent"),
            absent("mode"),
            absent("pos"),
            absent("specular"),
            absent("target"),
        ],
    },
    ElementSchema {
        namespace: Namespace::Default,
        type_name: "Pair",
        tag: "pair",
        attributes: &[
            absent("geom1"),
            absent("geom2"),
            absent("condim"),
            absent("friction"),
            absent("gap"),
            absent("margin"),
            absent("solimp"),
            absent("solref"),
        ],
    },
    ElementSchema {
        namespace: Namespace::Default,
        type_name: "Equality",
        tag: "equality",
        attributes: &[],
    },
    ElementSchema {
        namespace: Namespace::Default,
        type_name: "Tendon",
        tag: "tendon",
        attributes: &[],
    },
    ElementSchema {
        namespace: Namespace::Default,
        type_name: "General",
        tag: "general",
        attributes: &[
            absent("biasprm"),
            absent("biastype"),
            absent("cranklength"),
            absent("cranksite"),
            absent("ctrllimited"),
            absent("ctrlrange"),
            absent("dynprm"),
            absent("dyntype"),
            absent("forcelimited"),
            absent("forcerange"),
            absent("gainprm"),
            absent("gaintype"),
            absent("gear"),
            absent("joint"),
            absent("jointinparent"),
            absent("site"),
            absent("slidersite"),
            absent("tendon"),
            absent("user"),
        ],
    },
    ElementSchema {
        namespace: Namespace::Default,
        type_name: "Motor",
        tag: "motor",
        attributes: &[
            absent("cranklength"),
            absent("cranksite"),
            absent("ctrllimited"),
            absent("ctrlrange"),
            absent("forcelimited"),
            absent("forcerange"),
            absent("gear"),
            absent("joint"),
            absent("jointinparent"),
            absent("site"),
            absent("slidersite"),
            absent("tendon"),
            absent("user"),
        ],
    },
    ElementSchema {
        namespace: Namespace::Default,
        type_name: "Position",
        tag: "position",
        attributes: &[
            absent("kp"),
            absent("cranklength"),
            absent("cranksite"),
            absent("ctrllimited"),
            absent("ctrlrange"),
            absent("forcelimited"),
            absent("forcerange"),
            absent("gear"),
            absent("joint"),
            absent("slidersite"),
            absent("tendon"),
            absent("user"),
        ],
    },
    ElementSchema {
        namespace: Namespace::Default,
        type_name: "Velocity",
        tag: "velocity",
        attributes: &[
            absent("kv"),
            absent("cranklength"),
            absent("cranksite"),
            absent("ctrllimited"),
            absent("ctrlrange"),
            absent("forcelimited"),
            absent("forcerange"),
            absent("gear"),
            absent("joint"),
            absent("slidersite"),
            absent("tendon"),
            absent("user"),
        ],
    },
    ElementSchema {
        namespace: Namespace::Default,
        type_name: "Cylinder",
        tag: "cylinder",
        attributes: &[
            absent("area"),
            absent("bias"),
            absent("diameter"),
            absent("timeconst"),
            absent("cranklength"),
            absent("cranksite"),
            absent("ctrllimited"),
            absent("ctrlrange"),
            absent("forcelimited"),
            absent("forcerange"),
            absent("gear"),
            absent("joint"),
            absent("slidersite"),
            absent("tendon"),
            absent("user"),
        ],
    },
    ElementSchema {
        namespace: Namespace::Default,
        type_name: "Muscle",
        tag: "muscle",
        attributes: &[],
    },
    ElementSchema {
        namespace: Namespace::Equality,
        type_name: "Connect",
        tag: "connect",
        attributes: &[
            required("anchor"),
            required("body1"),
            value("active", "true"),
            absent("body2"),
            absent("class_"),
            absent("name"),
            value("solimp", "0.9 0.95 0.001"),
            value("solref", "0.02 1"),
        ],
    },
    ElementSchema {
        namespace: Namespace::Equality,
        type_name: "Weld",
        tag: "weld",
        attributes: &[
            required("body1"),
            absent("body2"),
            absent("active"),
            absent("class_"),
            absent("name"),
            value("solimp", "0.9 0.95 0.001"),
            value("solref", "0.02 1"),
        ],
    },
    ElementSchema {
        namespace: Namespace::Equality,
        type_name: "Joint",
        tag: "joint",
        attributes: &[
            required("joint1"),
            absent("joint2"),
            value("polycoef", "0.0 1.0 0.0 0.0 0.0"),
            absent("active"),
            absent("class_"),
            absent("name"),
            value("solimp", "0.9 0.95 0.001"),
            value("solref", "0.02 1"),
        ],
    },
    ElementSchema {
        namespace: Namespace::Equality,
        type_name: "Tendon",
        tag: "tendon",
        attributes: &[
            required("tendon1"),
            value("polycoef", "0.0 1.0 0.0 0.0"),
            absent("tendon2"),
            absent("active"),
            absent("class_"),
            absent("name"),
            value("solimp", "0.9 0.95 0.001"),
            value("solref", "0.02 1"),
        ],
    },
    ElementSchema {
        namespace: Namespace::Equality,
        type_name: "Distance",
        tag: "distance",
        attributes: &[
            required("geom1"),
            required("geom2"),
            absent("distance"),
            absent("active"),
            absent("class_"),
            absent("name"),
            value("solimp", "0.9 0.95 0.001"),
            value("solref", "0.02 1"),
        ],
    },
    ElementSchema {
        namespace: Namespace::Fixed,
        type_name: "Joint",
        tag: "joint",
        attributes: &[
            required("coef"),
            required("joint"),
        ],
    },
    ElementSchema {
        namespace: Namespace::Sensor,
        type_name: "Touch",
        tag: "touch",
        attributes: &[
            required("site"),
            absent("cutoff"),
            absent("name"),
            absent("noise"),
            value("user", "0 0 ..."),
        ],
    },
    ElementSchema {
        namespace: Namespace::Sensor,
        type_name: "Accelerometer",
        tag: "accelerometer",
        attributes: &[
            required("site"),
            absent("cutoff"),
            absent("name"),
            absent("noise"),
            value("user", "0 0 ..."),
        ],
    },
    ElementSchema {
        namespace: Namespace::Sensor,
        type_name: "Velocimeter",
        tag: "velocimeter",
        attributes: &[
            required("site"),
            absent("cutoff"),
            absent("name"),
            absent("noise"),
            value("user", "0 0 ..."),
        ],
    },
    ElementSchema {
        namespace: Namespace::Sensor,
        type_name: "Gyro",
        tag: "gyro",
        attributes: &[
            required("site"),
            absent("cutoff"),
            absent("name"),
            absent("noise"),
            value("user", "0 0 ..."),
        ],
    },
    ElementSchema {
        namespace: Namespace::Sensor,
        type_name: "Force",
        tag: "force",
        attributes: &[
            required("site"),
            absent("cutoff"),
            absent("name"),
            absent("noise"),
            value("user", "0 0 ..."),
        ],
    },
    ElementSchema {
        namespace: Namespace::Sensor,
        type_name: "Torque",
        tag: "torque",
        attributes: &[
            required("site"),
            absent("cutoff"),
            absent("name"),
            absent("noise"),
            value("user", "0 0 ..."),
        ],
    },
    ElementSchema {
        namespace: Namespace::Sensor,
        type_name: "Magnetometer",
        tag: "magnetometer",
        attributes: &[
            required("site"),
            absent("cutoff"),
            absent("name"),
            absent("noise"),
            value("user", "0 0 ..."),
        ],
    },
    ElementSchema {
        namespace: Namespace::Sensor,
        type_name: "Rangefinder",
        tag: "rangefinder",
        attributes: &[
            required("site"),
            absent("cutoff"),
            absent("name"),
            absent("noise"),
            value("user", "0 0 ..."),
        ],
    },
    ElementSchema {
        namespace: Namespace::Sensor,
        type_name: "Jointpos",
        tag: "jointpos",
        attributes: &[
            required("joint"),
            absent("cutoff"),
            absent("name"),
            absent("noise"),
            value("user", "0 0 ..."),
        ],
    },
    ElementSchema {
        namespace: Namespace::Sensor,
        type_name: "Jointvel",
        tag: "jointvel",
        attributes: &[
            required("joint"),
            absent("cutoff"),
            absent("name"),
            absent("noise"),
            value("user", "0 0 ..."),
        ],
    },
    ElementSchema {
        namespace: Namespace::Sensor,
        type_name: "Tendonpos",
        tag: "tendonpos",
        attributes: &[
            required("tendon"),
            absent("cutoff"),
            absent("name"),
            absent("noise"),
            value("user", "0 0 ..."),
        ],
    },
    ElementSchema {
        namespace: Namespace::Sensor,
        type_name: "Tendonvel",
        tag: "tendonvel",
        attributes: &[
            required("tendon"),
            absent("cutoff"),
            absent("name"),
            absent("noise"),
            value("user", "0 0 ..."),
        ],
    },
    ElementSchema {
        namespace: Namespace::Sensor,
        type_name: "Actuatorpos",
        tag: "actuatorpos",
        attributes: &[
            required("actuator"),
            absent("cutoff"),
            absent("name"),
            absent("noise"),
            value("user", "0 0 ..."),
        ],
    },
    ElementSchema {
        namespace: Namespace::Sensor,
        type_name: "Actuatorvel",
        tag: "actuatorvel",
        attributes: &[
            required("actuator"),
            absent("cutoff"),
            absent("name"),
            absent("noise"),
            value("user", "0 0 ..."),
        ],
    },
    ElementSchema {
        namespace: Namespace::Sensor,
        type_name: "Actuatorfrc",
        tag: "actuatorfrc",
        attributes: &[
            required("actuator"),
            absent("cutoff"),
            absent("name"),
            absent("noise"),
            value("user", "0 0 ..."),
        ],
    },
    ElementSchema {
        namespace: Namespace::Sensor,
        type_name: "Ballquat",
        tag: "ballquat",
        attributes: &[
            required("joint"),
            absent("cutoff"),
            absent("name"),
            absent("noise"),
            value("user", "0 0 ..."),
        ],
    },
    ElementSchema {
        namespace: Namespace::Sensor,
        type_name: "Ballangvel",
        tag: "ballangvel",
        attributes: &[
            required("joint"),
            absent("cutoff"),
            absent("name"),
            absent("noise"),
            value("user", "0 0 ..."),
        ],
    },
    ElementSchema {
        namespace: Namespace::Sensor,
        type_name: "Framepos",
        tag: "framepos",
        attributes: &[
            required("objname"),
            required("objtype"),
            absent("cutoff"),
            absent("name"),
            absent("noise"),
            value("user", "0 0 ..."),
        ],
    },
    ElementSchema {
        namespace: Namespace::Sensor,
        type_name: "Framequat",
        tag: "framequat",
        attributes: &[
            required("objname"),
            required("objtype"),
            absent("cutoff"),
            absent("name"),
            absent("noise"),
            value("user", "0 0 ..."),
        ],
    },
    ElementSchema {
        namespace: Namespace::Sensor,
        type_name: "Framexaxis",
        tag: "framexaxis",
        attributes: &[
            required("objname"),
            required("objtype"),
            absent("cutoff"),
            absent("name"),
            absent("noise"),
            value("user", "0 0 ..."),
        ],
    },
    ElementSchema {
        namespace: Namespace::Sensor,
        type_name: "Frameyaxis",
        tag: "frameyaxis",
        attributes: &[
            required("objname"),
            required("objtype"),
            absent("cutoff"),
            absent("name"),
            absent("noise"),
            value("user", "0 0 ..."),
        ],
    },
    ElementSchema {
        namespace: Namespace::Sensor,
        type_name: "Framezaxis",
        tag: "framezaxis",
        attributes: &[
            required("objname"),
            required("objtype"),
            absent("cutoff"),
            absent("name"),
            absent("noise"),
            value("user", "0 0 ..."),
        ],
    },
    ElementSchema {
        namespace: Namespace::Sensor,
        type_name: "Framelinvel",
        tag: "framelinvel",
        attributes: &[
            required("objname"),
            required("objtype"),
            absent("cutoff"),
            absent("name"),
            absent("noise"),
            value("user", "0 0 ..."),
        ],
    },
    ElementSchema {
        namespace: Namespace::Sensor,
        type_name: "Frameangvel",
        tag: "frameangvel",
        attributes: &[
            required("objname"),
            required("objtype"),
            absent("cutoff"),
            absent("name"),
            absent("noise"),
            value("user", "0 0 ..."),
        ],
    },
    ElementSchema {
        namespace: Namespace::Sensor,
        type_name: "Framelinacc",
        tag: "framelinacc",
        attributes: &[
            required("objname"),
            required("objtype"),
            absent("cutoff"),
            absent("name"),
            absent("noise"),
            value("user", "0 0 ..."),
        ],
    },
    ElementSchema {
        namespace: Namespace::Sensor,
        type_name: "Frameangacc",
        tag: "frameangacc",
        attributes: &[
            required("objname"),
            required("objtype"),
            absent("cutoff"),
            absent("name"),
            absent("noise"),
            value("user", "0 0 ..."),
        ],
    },
    ElementSchema {
        namespace: Namespace::Sensor,
        type_name: "Subtreecom",
        tag: "subtreecom",
        attributes: &[
            required("body"),
            absent("cutoff"),
            absent("name"),
            absent("noise"),
            value("user", "0 0 ..."),
        ],
    },
    ElementSchema {
        namespace: Namespace::Sensor,
        type_name: "Subtreelinvel",
        tag: "subtreelinvel",
        attributes: &[
            required("body"),
            absent("cutoff"),
            absent("name"),
            absent("noise"),
            value("user", "0 0 ..."),
        ],
    },
    ElementSchema {
        namespace: Namespace::Sensor,
        type_name: "Subtreeangmom",
        tag: "subtreeangmom",
        attributes: &[
            required("body"),
            absent("cutoff"),
            absent("name"),
            absent("noise"),
            value("user", "0 0 ..."),
        ],
    },
    ElementSchema {
        namespace: Namespace::Sensor,
        type_name: "User",
        tag: "user",
        attributes: &[
            required("datatype"),
            required("dim"),
            required("needstage"),
            required("objname"),
            required("objtype"),
            absent("cutoff"),
            absent("name"),
            absent("noise"),
            value("user", "0 0 ..."),
        ],
    },
    ElementSchema {
        namespace: Namespace::Visual,
        type_name: "Global",
        tag: "global",
        attributes: &[
            absent("fovy"),
            absent("glow"),
            absent("ipd"),
            absent("linewidth"),
            absent("offheight"),
            absent("offwidth"),
        ],
    },
    ElementSchema {
        namespace: Namespace::Visual,
        type_name: "Quality",
        tag: "quality",
        attributes: &[
            absent("numarrows"),
            absent("numquads"),
            absent("numslices"),
            absent("numstacks"),
            absent("offsamples"),
            absent("shadowsize"),
        ],
    },
    ElementSchema {
        namespace: Namespace::Visual,
        type_name: "Headlight",
        tag: "headlight",
        attributes: &[
            absent("active"),
            value("ambient", "0.1 0.1 0.1"),
            value("diffuse", "0.4 0.4 0.4"),
            value("specular", "0.5 0.5 0.5"),
        ],
    },
    ElementSchema {
        namespace: Namespace::Visual,
        type_name: "Map",
        tag: "map",
        attributes: &[
            absent("alpha"),
            absent("fogend"),
            absent("fogstart"),
            absent("force"),
            absent("shadowclip"),
            absent("shadowscale"),
            absent("stiffness"),
            absent("stiffnessrot"),
            absent("torque"),
            absent("zfar"),
            absent("znear"),
        ],
    },
    ElementSchema {
        namespace: Namespace::Visual,
        type_name: "Scale",
        tag: "scale",
        attributes: &[
            absent("actuatorlength"),
            absent("actuatorwidth"),
            absent("camera"),
            absent("com"),
            absent("connect"),
            absent("constraint"),
            absent("contactheight"),
            absent("contactwidth"),
            absent("forcewidth"),
            absent("framelength"),
            absent("framewidth"),
            absent("jointlength"),
            absent("jointwidth"),
            absent("light"),
            absent("selectpoint"),
            absent("slidercrank"),
        ],
    },
    ElementSchema {
        namespace: Namespace::Visual,
        type_name: "Rgba",
        tag: "rgba",
        attributes: &[
            value("actuator", "0.9 0.4 0.4 1.0"),
            value("camera", "0.6 0.9 0.6 1.0"),
            value("com", "0.9 0.9 0.9 1.0"),
            value("connect", "0.2 0.2 0.8 1.0"),
            value("constraint", "0.9 0.0 0.0 1.0"),
            value("contactforce", "0.7 0.9 0.9 1.0"),
            value("contactfriction", "0.9 0.8 0.4 1.0"),
            value("contactpoint", "0.9 0.6 0.2 1.0"),
            value("contacttorque", "0.9 0.7 0.9 1.0"),
            value("crankbroken", "0.9 0.0 0.0 1.0"),
            value("fog", "0.0 0.0 0.0 1.0"),
            value("force", "1.0 0.5 0.5 1.0"),
            value("inertia", "0.8 0.2 0.2 0.6"),
            value("joint", "0.2 0.6 0.8 1.0"),
            value("light", "0.6 0.6 0.9 1.0"),
            value("selectpoint", "0.9 0.9 0.1 1.0"),
            value("slidercrank", "0.5 0.3 0.8 1.0"),
        ],
    },
];
